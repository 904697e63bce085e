pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the parsed record types for easier access
pub use models::{ProxyGroup, Ruleset, RulesetBehavior};

// Re-export the parser entry points
pub use parser::{parse_config, ConfigParser, ParsedConfig};
pub use settings::{ParserSettings, SettingsError};
pub use utils::{extract_surge_regex_filter, is_regex_proxy_pattern, merge_regex_filters};
