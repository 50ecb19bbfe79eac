use crate::common::*;

#[doc = "One page of a paginated Notion list response"]
#[derive(Debug, Clone, Deserialize)]
pub struct NotionList<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> NotionList<T> {
    #[doc = "Cursor for the following page, `None` once the list is drained"]
    pub fn continuation(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}
