use crate::common::*;

#[doc = "Schema half of `GET /v1/databases/{id}`"]
#[derive(Debug, Clone, Deserialize)]
pub struct NotionDatabase {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, new)]
pub struct NotionSelectOption {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl NotionDatabase {
    #[doc = r#"
        Declared options of a `select`, `multi_select` or `status` property, in schema order.

        # Errors
        - the property does not exist
        - the property is some other type
    "#]
    pub fn select_options(&self, property: &str) -> anyhow::Result<Vec<NotionSelectOption>> {
        let prop: &Value = self.properties.get(property).ok_or_else(|| {
            anyhow!(
                "[NotionDatabase->select_options] Database '{}' has no property named '{}'",
                self.id,
                property
            )
        })?;

        let prop_type: &str = prop.get("type").and_then(|t| t.as_str()).unwrap_or("");

        if !matches!(prop_type, "select" | "multi_select" | "status") {
            return Err(anyhow!(
                "[NotionDatabase->select_options] Property '{}' is of type '{}', expected select, multi_select or status",
                property,
                prop_type
            ));
        }

        let options: Value = prop
            .get(prop_type)
            .and_then(|p| p.get("options"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        let options: Vec<NotionSelectOption> = serde_json::from_value(options).map_err(|e| {
            anyhow!(
                "[NotionDatabase->select_options] Failed to read options of '{}': {}",
                property,
                e
            )
        })?;

        Ok(options)
    }
}
