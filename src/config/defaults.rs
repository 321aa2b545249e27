//! Default value functions for configuration.

pub fn default_nickname() -> String {
    "guest".to_string()
}

pub fn default_code_page() -> String {
    slirc_proto::CodePage::default().name().to_string()
}

pub fn default_connect_timeout_secs() -> u64 {
    10
}
