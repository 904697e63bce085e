pub mod config;
pub mod proxy_group;
pub mod ruleset;

pub use config::{dedup_proxy_groups, parse_config, ConfigParser, ParsedConfig};
pub use proxy_group::{classify_group_field, parse_proxy_group, GroupField};
pub use ruleset::{classify_rule_source, parse_ruleset, parse_ruleset_with, RuleSource};
