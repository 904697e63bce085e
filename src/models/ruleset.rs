use std::fmt;

use serde::Serialize;

/// Default update interval of a ruleset, in seconds
pub const DEFAULT_RULESET_INTERVAL: u32 = 86400;

/// How the rules behind a ruleset URL are to be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetBehavior {
    #[default]
    Classical,
    Domain,
    Ipcidr,
}

impl RulesetBehavior {
    /// Get string representation of the behavior
    pub fn as_str(&self) -> &'static str {
        match self {
            RulesetBehavior::Classical => "classical",
            RulesetBehavior::Domain => "domain",
            RulesetBehavior::Ipcidr => "ipcidr",
        }
    }
}

impl fmt::Display for RulesetBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ruleset routed into a proxy group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ruleset {
    /// Name of the proxy group matching rules are routed into
    pub group: String,
    /// Remote URL, inline rule (`[]...`) or rewritten mirror URL
    pub rule_url: String,
    /// Behavior of the rule provider
    pub behavior: RulesetBehavior,
    /// Update interval in seconds
    pub interval: u32,
}

impl Ruleset {
    /// Create a ruleset with the default behavior and interval
    pub fn new(group: &str, rule_url: &str) -> Self {
        Self {
            group: group.to_string(),
            rule_url: rule_url.to_string(),
            behavior: RulesetBehavior::default(),
            interval: DEFAULT_RULESET_INTERVAL,
        }
    }

    /// Whether this ruleset carries an inline rule instead of a URL
    pub fn is_inline(&self) -> bool {
        self.rule_url.starts_with("[]")
    }
}
