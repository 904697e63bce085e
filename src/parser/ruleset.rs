use log::debug;

use crate::models::{Ruleset, RulesetBehavior};
use crate::settings::ParserSettings;

/// Rule spec prefixes that select a Clash rule provider behavior
const TYPED_PREFIXES: [(&str, RulesetBehavior); 3] = [
    ("clash-classic:", RulesetBehavior::Classical),
    ("clash-domain:", RulesetBehavior::Domain),
    ("clash-ipcidr:", RulesetBehavior::Ipcidr),
];

/// Where the rules of a ruleset come from, as recognized from its spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSource<'a> {
    /// `clash-*:` prefixed URL, prefix removed
    Typed {
        behavior: RulesetBehavior,
        url: &'a str,
    },
    /// Inline rule such as `[]GEOIP,CN`, `[]` kept
    Inline(&'a str),
    /// Anything starting with `http`
    Remote(&'a str),
    /// Path relative to the ACL4SSR repository, prefix removed
    Acl4ssr(&'a str),
    /// Unrecognized spec, passed through untouched
    Verbatim(&'a str),
}

impl RuleSource<'_> {
    /// Resolve the behavior and final rule URL of this source
    pub fn resolve(&self, settings: &ParserSettings) -> (RulesetBehavior, String) {
        match *self {
            RuleSource::Typed { behavior, url } => (behavior, url.to_string()),
            RuleSource::Inline(rule) => (RulesetBehavior::default(), rule.to_string()),
            RuleSource::Remote(url) | RuleSource::Verbatim(url) => {
                (RulesetBehavior::default(), url.to_string())
            }
            RuleSource::Acl4ssr(path) => (
                RulesetBehavior::default(),
                format!("{}{}", settings.acl4ssr_base_url, path),
            ),
        }
    }
}

/// Split a trailing `,<interval>` suffix off a rule spec
///
/// The suffix is only taken when the text after the last comma is an
/// integer; otherwise the comma belongs to the content (`[]GEOIP,CN`).
pub fn split_interval(rule_spec: &str) -> (&str, Option<u32>) {
    match rule_spec.rfind(',') {
        Some(pos) if pos > 0 => match rule_spec[pos + 1..].trim().parse::<u32>() {
            Ok(interval) => (rule_spec[..pos].trim_end(), Some(interval)),
            Err(_) => (rule_spec, None),
        },
        _ => (rule_spec, None),
    }
}

/// Recognize the source of a rule spec whose interval suffix is already removed
pub fn classify_rule_source<'a>(rule_spec: &'a str, settings: &ParserSettings) -> RuleSource<'a> {
    for (prefix, behavior) in TYPED_PREFIXES.iter() {
        if let Some(url) = rule_spec.strip_prefix(*prefix) {
            return RuleSource::Typed {
                behavior: *behavior,
                url,
            };
        }
    }

    if rule_spec.starts_with("[]") {
        return RuleSource::Inline(rule_spec);
    }
    if rule_spec.starts_with("http") {
        return RuleSource::Remote(rule_spec);
    }
    if !settings.acl4ssr_prefix.is_empty() {
        if let Some(path) = rule_spec.strip_prefix(settings.acl4ssr_prefix.as_str()) {
            return RuleSource::Acl4ssr(path);
        }
    }

    RuleSource::Verbatim(rule_spec)
}

/// Decode the `group` and rule spec halves of a `ruleset=` line
pub fn parse_ruleset_with(group: &str, rule_spec: &str, settings: &ParserSettings) -> Ruleset {
    let (rule_spec, interval) = split_interval(rule_spec);
    let source = classify_rule_source(rule_spec, settings);
    let (behavior, rule_url) = source.resolve(settings);

    debug!(
        "Ruleset '{}' routes {:?} into group '{}'",
        rule_url, source, group
    );

    Ruleset {
        group: group.to_string(),
        rule_url,
        behavior,
        interval: interval.unwrap_or(settings.default_interval),
    }
}

/// Decode a ruleset using the default settings
pub fn parse_ruleset(group: &str, rule_spec: &str) -> Ruleset {
    parse_ruleset_with(group, rule_spec, &ParserSettings::default())
}
