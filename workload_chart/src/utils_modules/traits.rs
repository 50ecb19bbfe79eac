use crate::common::*;

use crate::dto::notion::notion_page::*;

/* Notion page → domain type conversion at the adapter boundary */
pub trait FromNotionPage<M>
where
    Self: Sized,
{
    fn from_notion_page(page: &NotionPage, mapping: &M, tz: Tz) -> Self;
}
