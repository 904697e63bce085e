use serde::Serialize;

/// Member token that stands for every available proxy
pub const WILDCARD_MEMBER: &str = ".*";

/// Configuration for a proxy group declared with `custom_proxy_group=`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProxyGroup {
    /// Name of the proxy group
    pub name: String,
    /// Type of the proxy group (`select`, `url-test`, ...), kept verbatim
    #[serde(rename = "type")]
    pub group_type: String,
    /// Proxy names or regex patterns, in declaration order
    pub proxies: Vec<String>,
    /// Whether the group includes all available proxies (`.*`)
    pub has_wildcard: bool,
    /// URL for health checks
    pub url: String,
    /// Interval in seconds between health checks
    pub interval: u32,
    /// Latency tolerance for url-test groups
    pub tolerance: u32,
}

impl ProxyGroup {
    /// Create a new proxy group with no members
    pub fn new(name: &str, group_type: &str) -> Self {
        Self {
            name: name.to_string(),
            group_type: group_type.to_string(),
            ..Default::default()
        }
    }

    /// A group without a name is never emitted by the parser
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// A collection of proxy groups
pub type ProxyGroups = Vec<ProxyGroup>;
