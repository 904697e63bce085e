use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{ProxyGroup, WILDCARD_MEMBER};

/// Separator between the fields of a `custom_proxy_group=` value
pub const FIELD_SEPARATOR: char = '`';

lazy_static! {
    static ref LEADING_DIGITS: Regex = Regex::new(r"^[0-9]+").unwrap();
}

/// Meaning of a single proxy group field after the name and type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField<'a> {
    /// `http://` or `https://` health check URL
    HealthCheckUrl(&'a str),
    /// `interval`, `interval,tolerance` or `interval,,tolerance`
    Timing {
        interval: Option<u32>,
        tolerance: Option<u32>,
    },
    /// `.*`, every available proxy
    Wildcard,
    /// Proxy name, group name or regex pattern, `[]` removed
    Member(&'a str),
    /// Nothing left once trimmed and unwrapped
    Empty,
}

impl GroupField<'_> {
    /// Fold this field into the group being decoded
    pub fn apply(self, group: &mut ProxyGroup) {
        match self {
            GroupField::HealthCheckUrl(url) => group.url = url.to_string(),
            GroupField::Timing {
                interval,
                tolerance,
            } => {
                if let Some(interval) = interval {
                    group.interval = interval;
                }
                if let Some(tolerance) = tolerance {
                    group.tolerance = tolerance;
                }
            }
            GroupField::Wildcard => group.has_wildcard = true,
            GroupField::Member(name) => group.proxies.push(name.to_string()),
            GroupField::Empty => {}
        }
    }
}

/// Read the leading decimal digits of a value, ignoring whatever follows
fn scan_number(value: &str) -> Option<u32> {
    LEADING_DIGITS
        .find(value.trim())
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

fn parse_timing(field: &str) -> GroupField<'_> {
    if !field.contains(',') {
        return GroupField::Timing {
            interval: scan_number(field),
            tolerance: None,
        };
    }

    let parts: Vec<&str> = field.split(',').collect();
    let interval = match parts[0].trim() {
        "" => None,
        first => scan_number(first),
    };
    // `300,,50` leaves the middle slot empty, so take the last filled one
    let tolerance = parts[1..]
        .iter()
        .rev()
        .map(|part| part.trim())
        .find(|part| !part.is_empty())
        .and_then(scan_number);

    GroupField::Timing {
        interval,
        tolerance,
    }
}

/// Recognize what a proxy group field after the name and type stands for
pub fn classify_group_field(field: &str) -> GroupField<'_> {
    let field = field.trim();

    if field.starts_with("http://") || field.starts_with("https://") {
        return GroupField::HealthCheckUrl(field);
    }
    if LEADING_DIGITS.is_match(field) {
        return parse_timing(field);
    }

    let name = field.strip_prefix("[]").unwrap_or(field);
    if name.is_empty() {
        GroupField::Empty
    } else if name == WILDCARD_MEMBER {
        GroupField::Wildcard
    } else {
        GroupField::Member(name)
    }
}

/// Decode the value of a `custom_proxy_group=` line
///
/// Returns a group with an empty name when the value has fewer than two
/// fields; callers drop such groups.
pub fn parse_proxy_group(fields: &str) -> ProxyGroup {
    let parts: Vec<&str> = fields.split(FIELD_SEPARATOR).collect();
    if parts.len() < 2 {
        debug!("Proxy group '{}' has no type, ignoring", fields);
        return ProxyGroup::default();
    }

    let mut group = ProxyGroup::new(parts[0].trim(), parts[1].trim());
    for part in &parts[2..] {
        classify_group_field(part).apply(&mut group);
    }

    debug!(
        "Parsed proxy group '{}' ({}) with {} members",
        group.name,
        group.group_type,
        group.proxies.len()
    );
    group
}
