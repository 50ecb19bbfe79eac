use crate::common::*;

pub const NOTION_API_KEY: &str = "NOTION_API_KEY";
pub const NOTION_DATABASE_ID: &str = "NOTION_DATABASE_ID";
pub const NOTION_PAGE_ID: &str = "NOTION_PAGE_ID";

/* Optional: TOML file overriding the chart/allocation defaults */
pub const CHART_CONFIG_PATH: &str = "CHART_CONFIG_PATH";

pub const LOG_DIR: &str = "LOG_DIR";
pub const LOG_LEVEL: &str = "LOG_LEVEL";

#[doc = r#"
    Reads a required value through `lookup` and turns absence into a configuration error.

    An empty or whitespace-only value is treated the same as a missing one.

    # Arguments
    * `lookup` - environment accessor (`env::var` in production, a map in tests)
    * `key`    - variable name

    # Returns
    * `anyhow::Result<String>` - the trimmed value
"#]
pub fn get_required_with<F>(lookup: &F, key: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) if !val.trim().is_empty() => Ok(val.trim().to_string()),
        _ => Err(anyhow!(
            "[ENV configuration Error] '{}' must be set to a non-empty value",
            key
        )),
    }
}

#[doc = "Reads an optional value, mapping blank strings to `None`"]
pub fn get_optional_with<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[doc = "Process environment accessor used outside of tests"]
pub fn process_env(key: &str) -> Option<String> {
    env::var(key).ok()
}
