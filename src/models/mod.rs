//! Records produced by the configuration parser
//!
//! Both record types are plain data: the parser creates them, hands them to
//! the caller and keeps nothing.
//!
//! ```rust
//! use acl4ssr_parser::models::{ProxyGroup, Ruleset, RulesetBehavior};
//!
//! let ruleset = Ruleset::new("Proxy", "https://example.com/proxy.list");
//! assert_eq!(ruleset.behavior, RulesetBehavior::Classical);
//!
//! let group = ProxyGroup::new("Auto", "url-test");
//! assert!(group.proxies.is_empty());
//! ```

pub mod proxy_group_config;
pub mod ruleset;

pub use proxy_group_config::{ProxyGroup, ProxyGroups, WILDCARD_MEMBER};
pub use ruleset::{Ruleset, RulesetBehavior, DEFAULT_RULESET_INTERVAL};
