use crate::common::*;

use crate::model::configs::{chart_config::*, notion_config::*};

use crate::utils_modules::{io_utils::*, time_utils::*};

use crate::env_configuration::env_config::*;

#[doc = r#"
    Everything one invocation needs, built once in `main` and handed to each component.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct AppConfig {
    notion: NotionConfig,
    chart: ChartConfig,
    reference_tz: Tz,
}

impl AppConfig {
    #[doc = "Builds the configuration from the process environment"]
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&process_env)
    }

    #[doc = r#"
        1. Read the three required Notion values
        2. Read `CHART_CONFIG_PATH` if set, else use the defaults
        3. Validate the chart settings and resolve the reference timezone
    "#]
    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let notion: NotionConfig = NotionConfig::from_lookup(lookup)?;

        let chart: ChartConfig = match get_optional_with(lookup, CHART_CONFIG_PATH) {
            Some(path) => {
                info!("Loading chart configuration from {}", path);
                read_toml_from_file::<ChartConfig>(&path)?
            }
            None => {
                info!("CHART_CONFIG_PATH not set; using default chart configuration");
                ChartConfig::default()
            }
        };

        chart.validate()?;

        let reference_tz: Tz = parse_reference_timezone(chart.reference_timezone())?;

        Ok(AppConfig::new(notion, chart, reference_tz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_defaults_when_no_config_file() {
        let lookup = |key: &str| match key {
            NOTION_API_KEY => Some("secret".to_string()),
            NOTION_DATABASE_ID => Some("db".to_string()),
            NOTION_PAGE_ID => Some("page".to_string()),
            _ => None,
        };

        let config: AppConfig = AppConfig::from_lookup(&lookup).unwrap();
        assert_eq!(config.notion().database_id(), "db");
        assert_eq!(*config.chart().num_days(), 14);
        assert_eq!(config.reference_tz().name(), "America/New_York");
    }

    #[test]
    fn bad_timezone_in_config_file_fails() {
        let path = std::env::temp_dir().join(format!(
            "workload_chart_app_config_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "reference_timezone = \"Nowhere/Special\"\n").unwrap();
        let path_str: String = path.to_string_lossy().to_string();

        let lookup = move |key: &str| match key {
            NOTION_API_KEY => Some("secret".to_string()),
            NOTION_DATABASE_ID => Some("db".to_string()),
            NOTION_PAGE_ID => Some("page".to_string()),
            CHART_CONFIG_PATH => Some(path_str.clone()),
            _ => None,
        };

        let err = AppConfig::from_lookup(&lookup).unwrap_err();
        assert!(err.to_string().contains("Nowhere/Special"));

        std::fs::remove_file(&path).ok();
    }
}
