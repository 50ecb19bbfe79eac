use crate::common::*;

#[doc = r#"
    A database row as returned by `POST /v1/databases/{id}/query`.

    Properties are kept as raw JSON; the typed accessors below pull out the handful of
    property shapes the program reads and return `None` for anything else.
"#]
#[derive(Debug, Clone, Deserialize)]
pub struct NotionPage {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl NotionPage {
    fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    #[doc = "Concatenated plain text of the page's title property"]
    pub fn title_text(&self) -> Option<String> {
        let title: &Vec<Value> = self
            .properties
            .values()
            .find(|prop| prop.get("type").and_then(|t| t.as_str()) == Some("title"))?
            .get("title")?
            .as_array()?;

        let text: String = title
            .iter()
            .filter_map(|part| part.get("plain_text").and_then(|t| t.as_str()))
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    #[doc = "Value of a `number` property, or a formula/rollup that evaluates to a number"]
    pub fn number_property(&self, name: &str) -> Option<f64> {
        let prop: &Value = self.property(name)?;

        match prop.get("type").and_then(|t| t.as_str())? {
            "number" => prop.get("number")?.as_f64(),
            "formula" => prop.get("formula")?.get("number")?.as_f64(),
            "rollup" => prop.get("rollup")?.get("number")?.as_f64(),
            _ => None,
        }
    }

    #[doc = "`start` string of a `date` property"]
    pub fn date_start(&self, name: &str) -> Option<String> {
        self.property(name)?
            .get("date")?
            .get("start")?
            .as_str()
            .map(|s| s.to_string())
    }

    #[doc = "Option name of a `select`/`status` property, or the first `multi_select` option"]
    pub fn select_name(&self, name: &str) -> Option<String> {
        let prop: &Value = self.property(name)?;

        let option: &Value = match prop.get("type").and_then(|t| t.as_str())? {
            "select" => prop.get("select")?,
            "status" => prop.get("status")?,
            "multi_select" => prop.get("multi_select")?.as_array()?.first()?,
            _ => return None,
        };

        option
            .get("name")?
            .as_str()
            .map(|s| s.to_string())
            .filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(properties: Value) -> NotionPage {
        serde_json::from_value(json!({ "id": "p", "properties": properties })).unwrap()
    }

    #[test]
    fn title_concatenates_rich_text_runs() {
        let page = page(json!({
            "Task": { "type": "title", "title": [
                { "plain_text": "Fix " },
                { "plain_text": "bike" }
            ] }
        }));
        assert_eq!(page.title_text().as_deref(), Some("Fix bike"));
    }

    #[test]
    fn number_reads_formula_results() {
        let page = page(json!({
            "Points": { "type": "formula", "formula": { "type": "number", "number": 3 } },
            "Text": { "type": "rich_text", "rich_text": [] }
        }));
        assert_eq!(page.number_property("Points"), Some(3.0));
        assert_eq!(page.number_property("Text"), None);
        assert_eq!(page.number_property("Missing"), None);
    }

    #[test]
    fn status_property_name_is_readable() {
        let page = page(json!({
            "Status": { "type": "status", "status": { "name": "In progress", "color": "blue" } }
        }));
        assert_eq!(page.select_name("Status").as_deref(), Some("In progress"));
    }

    #[test]
    fn page_without_properties_deserializes() {
        let page: NotionPage = serde_json::from_value(json!({ "id": "bare" })).unwrap();
        assert!(page.properties.is_empty());
        assert_eq!(page.title_text(), None);
    }
}
