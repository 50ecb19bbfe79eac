pub mod app_config;
pub mod chart_config;
pub mod notion_config;
