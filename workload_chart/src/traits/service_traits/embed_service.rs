use crate::common::*;

use crate::enums::publish_status::*;

#[async_trait]
pub trait EmbedService: Send + Sync {
    #[doc = "Points the page's embed block at `chart_url` unless it already does"]
    async fn publish_chart(&self, chart_url: &str) -> anyhow::Result<PublishStatus>;
}
