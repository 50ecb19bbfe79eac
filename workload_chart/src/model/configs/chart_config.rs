use crate::common::*;

use crate::enums::{effort_mode::*, status_filter_kind::*};

#[doc = r#"
    Tunables for allocation, rendering and the Notion property layout.

    Loaded from the TOML file named by `CHART_CONFIG_PATH`; every field falls back to
    its default so the file may be partial or absent.
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    pub effort_mode: EffortMode,
    pub num_days: usize,
    pub short_window: usize,
    pub axis_floor: f64,
    pub reference_timezone: String,

    pub effort_property: String,
    pub start_property: String,
    pub end_property: String,
    pub date_property: String,
    pub category_property: Option<String>,
    pub category_priority: Option<Vec<String>>,
    pub other_label: String,

    pub status_property: String,
    pub status_filter_kind: StatusFilterKind,
    pub exclude_status: String,

    pub effort_unit: String,
    pub chart_width: u32,
    pub chart_height: u32,
    pub background_color: String,

    pub request_timeout_secs: u64,
    pub run_timeout_secs: u64,

    pub notion_api_base: String,
    pub chart_api_base: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            effort_mode: EffortMode::Spread,
            num_days: 14,
            short_window: 7,
            axis_floor: 8.0,
            reference_timezone: "America/New_York".to_string(),
            effort_property: "Hours".to_string(),
            start_property: "Start".to_string(),
            end_property: "Finish".to_string(),
            date_property: "Date".to_string(),
            category_property: None,
            category_priority: None,
            other_label: "Other".to_string(),
            status_property: "Status".to_string(),
            status_filter_kind: StatusFilterKind::Select,
            exclude_status: "Done".to_string(),
            effort_unit: "Hours".to_string(),
            chart_width: 800,
            chart_height: 300,
            background_color: "transparent".to_string(),
            request_timeout_secs: 10,
            run_timeout_secs: 60,
            notion_api_base: "https://api.notion.com".to_string(),
            chart_api_base: "https://quickchart.io".to_string(),
        }
    }
}

impl ChartConfig {
    #[doc = "Rejects values that would make the grid or the chart meaningless"]
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.num_days == 0 {
            return Err(anyhow!("[ChartConfig->validate] 'num_days' must be at least 1"));
        }

        if self.short_window > self.num_days {
            return Err(anyhow!(
                "[ChartConfig->validate] 'short_window' ({}) cannot exceed 'num_days' ({})",
                self.short_window,
                self.num_days
            ));
        }

        if !self.axis_floor.is_finite() || self.axis_floor <= 0.0 {
            return Err(anyhow!(
                "[ChartConfig->validate] 'axis_floor' must be a positive number"
            ));
        }

        if self.other_label.trim().is_empty() {
            return Err(anyhow!("[ChartConfig->validate] 'other_label' cannot be empty"));
        }

        if self.run_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(anyhow!(
                "[ChartConfig->validate] timeouts must be greater than zero"
            ));
        }

        Ok(())
    }
}
