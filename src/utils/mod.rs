pub mod regex_filter;

// Re-export common utilities
pub use regex_filter::{extract_surge_regex_filter, is_regex_proxy_pattern, merge_regex_filters};
