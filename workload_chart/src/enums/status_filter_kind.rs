use crate::common::*;

/* Notion filters a `select` property and a `status` property with different keys */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilterKind {
    #[default]
    Select,
    Status,
}

impl StatusFilterKind {
    pub fn filter_key(&self) -> &'static str {
        match self {
            StatusFilterKind::Select => "select",
            StatusFilterKind::Status => "status",
        }
    }
}
