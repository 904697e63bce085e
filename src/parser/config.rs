//! Line scanner for ACL4SSR-style configuration text
//!
//! Only two directives are recognized:
//!
//! ```text
//! ruleset=<group>,<rule spec>[,<interval>]
//! custom_proxy_group=<name>`<type>`<field>`<field>...
//! ```
//!
//! Every other line is skipped, so unknown directives never fail a parse.

use linked_hash_map::LinkedHashMap;
use log::{debug, trace, warn};
use serde::Serialize;

use crate::models::{ProxyGroup, Ruleset};
use crate::parser::proxy_group::parse_proxy_group;
use crate::parser::ruleset::parse_ruleset_with;
use crate::settings::ParserSettings;

const RULESET_DIRECTIVE: &str = "ruleset=";
const PROXY_GROUP_DIRECTIVE: &str = "custom_proxy_group=";

/// Rulesets and proxy groups found in a configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedConfig {
    /// Rulesets in line order
    pub rulesets: Vec<Ruleset>,
    /// Proxy groups, one per name
    pub proxy_groups: Vec<ProxyGroup>,
}

impl ParsedConfig {
    pub fn into_parts(self) -> (Vec<Ruleset>, Vec<ProxyGroup>) {
        (self.rulesets, self.proxy_groups)
    }
}

/// Parser for `ruleset=` and `custom_proxy_group=` directives
#[derive(Debug, Clone, Default)]
pub struct ConfigParser {
    settings: ParserSettings,
}

impl ConfigParser {
    pub fn new(settings: ParserSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ParserSettings {
        &self.settings
    }

    /// Parse the full configuration text
    pub fn parse(&self, content: &str) -> ParsedConfig {
        let mut rulesets = Vec::new();
        let mut proxy_groups = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            // Skip empty lines and comments
            if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
                continue;
            }

            if let Some(value) = trimmed.strip_prefix(RULESET_DIRECTIVE) {
                if let Some(ruleset) = self.parse_ruleset_line(value) {
                    rulesets.push(ruleset);
                } else {
                    warn!("Invalid ruleset format on line {}: {}", index + 1, trimmed);
                }
            } else if let Some(value) = trimmed.strip_prefix(PROXY_GROUP_DIRECTIVE) {
                let group = parse_proxy_group(value);
                if group.is_empty() {
                    debug!("Skipping unnamed proxy group on line {}", index + 1);
                } else {
                    proxy_groups.push(group);
                }
            } else {
                trace!("Ignoring line {}: {}", index + 1, trimmed);
            }
        }

        ParsedConfig {
            rulesets,
            proxy_groups: dedup_proxy_groups(proxy_groups),
        }
    }

    fn parse_ruleset_line(&self, value: &str) -> Option<Ruleset> {
        let (group, rule_spec) = value.split_once(',')?;
        let rule_spec = rule_spec.trim();
        if rule_spec.is_empty() {
            return None;
        }
        Some(parse_ruleset_with(group.trim(), rule_spec, &self.settings))
    }
}

/// Parse configuration text with the default settings
pub fn parse_config(content: &str) -> ParsedConfig {
    ConfigParser::default().parse(content)
}

/// Keep only the last group declared under each name
///
/// Groups come out in the order of each name's last declaration.
pub fn dedup_proxy_groups(groups: Vec<ProxyGroup>) -> Vec<ProxyGroup> {
    let mut by_name: LinkedHashMap<String, ProxyGroup> = LinkedHashMap::new();

    for group in groups {
        // Re-inserting an existing key moves it to the back
        if by_name.insert(group.name.clone(), group).is_some() {
            trace!("Proxy group redeclared, keeping the later one");
        }
    }

    by_name.into_iter().map(|(_, group)| group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(groups: &[ProxyGroup]) -> Vec<&str> {
        groups.iter().map(|g| g.name.as_str()).collect()
    }

    #[test]
    fn test_dedup_keeps_last_occurrence_position() {
        let groups = vec![
            ProxyGroup::new("A", "select"),
            ProxyGroup::new("B", "select"),
            ProxyGroup::new("A", "url-test"),
            ProxyGroup::new("C", "select"),
        ];
        let deduped = dedup_proxy_groups(groups);
        assert_eq!(names(&deduped), vec!["B", "A", "C"]);
        assert_eq!(deduped[1].group_type, "url-test");
    }

    #[test]
    fn test_dedup_without_duplicates_is_identity() {
        let groups = vec![ProxyGroup::new("A", "select"), ProxyGroup::new("B", "select")];
        assert_eq!(dedup_proxy_groups(groups.clone()), groups);
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let parsed = parse_config("\n; ruleset=A,http://a\n# ruleset=B,http://b\n   \n");
        assert!(parsed.rulesets.is_empty());
        assert!(parsed.proxy_groups.is_empty());
    }

    #[test]
    fn test_ruleset_line_needs_two_parts() {
        let parsed = parse_config("ruleset=OnlyGroup\nruleset=Empty,\n");
        assert!(parsed.rulesets.is_empty());
    }

    #[test]
    fn test_trims_ruleset_halves() {
        let parsed = parse_config("  ruleset= Proxy , https://x/y.list  \r\n");
        assert_eq!(parsed.rulesets.len(), 1);
        assert_eq!(parsed.rulesets[0].group, "Proxy");
        assert_eq!(parsed.rulesets[0].rule_url, "https://x/y.list");
    }

    #[test]
    fn test_into_parts() {
        let (rulesets, groups) =
            parse_config("ruleset=DIRECT,[]FINAL\ncustom_proxy_group=P`select`[]DIRECT")
                .into_parts();
        assert_eq!(rulesets.len(), 1);
        assert_eq!(groups.len(), 1);
    }
}
