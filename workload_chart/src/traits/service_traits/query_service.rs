use crate::common::*;

use crate::model::task::task::*;

#[async_trait]
pub trait QueryService: Send + Sync {
    #[doc = "Every open task in the source database, all pages drained"]
    async fn fetch_open_tasks(&self) -> anyhow::Result<Vec<Task>>;
}
