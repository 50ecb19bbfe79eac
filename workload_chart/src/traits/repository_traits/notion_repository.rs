use crate::common::*;

use crate::dto::notion::{notion_block::*, notion_database::*, notion_list::*, notion_page::*};

#[async_trait]
pub trait NotionRepository: Send + Sync {
    async fn query_database(
        &self,
        database_id: &str,
        filter: Option<&Value>,
        start_cursor: Option<&str>,
    ) -> anyhow::Result<NotionList<NotionPage>>;
    async fn retrieve_database(&self, database_id: &str) -> anyhow::Result<NotionDatabase>;
    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> anyhow::Result<NotionList<NotionBlock>>;
    async fn update_embed_url(&self, block_id: &str, url: &str) -> anyhow::Result<()>;
}
