//! Settings module for the configuration parser

pub mod parser_settings;

pub use parser_settings::{ParserSettings, SettingsError, ACL4SSR_BASE_URL, ACL4SSR_PREFIX};
