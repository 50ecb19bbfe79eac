use crate::common::*;

use crate::env_configuration::env_config::*;

#[derive(Clone, Getters, new)]
#[getset(get = "pub")]
pub struct NotionConfig {
    api_key: String,
    database_id: String,
    page_id: String,
}

impl NotionConfig {
    #[doc = "Collects the three required Notion identifiers, failing on the first one missing"]
    pub fn from_lookup<F>(lookup: &F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(NotionConfig::new(
            get_required_with(lookup, NOTION_API_KEY)?,
            get_required_with(lookup, NOTION_DATABASE_ID)?,
            get_required_with(lookup, NOTION_PAGE_ID)?,
        ))
    }
}

/* The API key never reaches the logs */
impl fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_key", &"***")
            .field("database_id", &self.database_id)
            .field("page_id", &self.page_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_api_key() {
        let config = NotionConfig::new(
            "secret_abc".to_string(),
            "db".to_string(),
            "page".to_string(),
        );
        let rendered: String = format!("{:?}", config);
        assert!(!rendered.contains("secret_abc"));
        assert!(rendered.contains("db"));
    }

    #[test]
    fn missing_page_id_fails() {
        let lookup = |key: &str| match key {
            NOTION_API_KEY => Some("secret".to_string()),
            NOTION_DATABASE_ID => Some("db".to_string()),
            _ => None,
        };
        let err = NotionConfig::from_lookup(&lookup).unwrap_err();
        assert!(err.to_string().contains(NOTION_PAGE_ID));
    }
}
