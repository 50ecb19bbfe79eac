use crate::common::*;

use crate::traits::{repository_traits::notion_repository::*, service_traits::query_service::*};

use crate::dto::notion::{notion_list::*, notion_page::*};

use crate::model::{configs::chart_config::*, task::task::*};

use crate::enums::{effort_mode::*, status_filter_kind::*};

use crate::utils_modules::traits::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: NotionRepository> {
    notion_repo: Arc<R>,
    database_id: String,
    chart_config: ChartConfig,
    reference_tz: Tz,
}

impl<R: NotionRepository> QueryServiceImpl<R> {
    #[doc = r#"
        Notion filter excluding finished tasks, e.g.
        `{"property": "Status", "select": {"does_not_equal": "Done"}}`.
        An empty `exclude_status` turns filtering off.
    "#]
    fn open_task_filter(&self) -> Option<Value> {
        let exclude: &str = self.chart_config.exclude_status().trim();

        if exclude.is_empty() {
            return None;
        }

        let kind: &StatusFilterKind = self.chart_config.status_filter_kind();

        Some(json!({
            "property": self.chart_config.status_property(),
            kind.filter_key(): { "does_not_equal": exclude }
        }))
    }

    #[doc = "Property layout for the configured effort mode"]
    fn field_mapping(&self) -> TaskFieldMapping {
        let config: &ChartConfig = &self.chart_config;

        match config.effort_mode() {
            EffortMode::Spread => TaskFieldMapping::new(
                config.effort_property().to_string(),
                config.start_property().to_string(),
                Some(config.end_property().to_string()),
                config.category_property().clone(),
            ),
            EffortMode::SingleDay => TaskFieldMapping::new(
                config.effort_property().to_string(),
                config.date_property().to_string(),
                None,
                config.category_property().clone(),
            ),
        }
    }

    #[doc = "Follows `next_cursor` until Notion reports no more pages"]
    async fn fetch_all_pages(&self, filter: Option<&Value>) -> anyhow::Result<Vec<NotionPage>> {
        let mut pages: Vec<NotionPage> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let list: NotionList<NotionPage> = self
                .notion_repo
                .query_database(&self.database_id, filter, cursor.as_deref())
                .await
                .context("[QueryServiceImpl->fetch_all_pages] Failed to query task database")?;

            let next: Option<String> = list.continuation().map(|c| c.to_string());
            pages.extend(list.results);

            match next {
                Some(next_cursor) => cursor = Some(next_cursor),
                None => break,
            }
        }

        Ok(pages)
    }
}

#[async_trait]
impl<R: NotionRepository> QueryService for QueryServiceImpl<R> {
    async fn fetch_open_tasks(&self) -> anyhow::Result<Vec<Task>> {
        let filter: Option<Value> = self.open_task_filter();
        let pages: Vec<NotionPage> = self.fetch_all_pages(filter.as_ref()).await?;

        let mapping: TaskFieldMapping = self.field_mapping();

        let tasks: Vec<Task> = pages
            .iter()
            .map(|page| Task::from_notion_page(page, &mapping, self.reference_tz))
            .collect();

        info!("Fetched {} open tasks", tasks.len());

        Ok(tasks)
    }
}
