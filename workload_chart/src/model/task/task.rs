use crate::common::*;

use crate::dto::notion::notion_page::*;

use crate::utils_modules::{time_utils::*, traits::*};

#[doc = r#"
    One task as the allocator sees it.

    `start_date` doubles as the single date in single-day mode; `end_date` is only
    meaningful in spread mode.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct Task {
    name: String,
    effort: f64,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    category: Option<String>,
}

#[doc = "Which Notion properties hold each task field"]
#[derive(Debug, Clone, new)]
pub struct TaskFieldMapping {
    pub effort_property: String,
    pub start_property: String,
    pub end_property: Option<String>,
    pub category_property: Option<String>,
}

impl FromNotionPage<TaskFieldMapping> for Task {
    fn from_notion_page(page: &NotionPage, mapping: &TaskFieldMapping, tz: Tz) -> Self {
        let name: String = page.title_text().unwrap_or_else(|| page.id.clone());

        let effort: f64 = match page.number_property(&mapping.effort_property) {
            Some(effort) => effort,
            None => {
                debug!(
                    "[Task->from_notion_page] '{}' has no '{}' value; counting it as 0",
                    name, mapping.effort_property
                );
                0.0
            }
        };

        let start_date: Option<NaiveDate> = parse_date_field(page, &mapping.start_property, tz, &name);

        let end_date: Option<NaiveDate> = mapping
            .end_property
            .as_deref()
            .and_then(|prop| parse_date_field(page, prop, tz, &name));

        let category: Option<String> = mapping
            .category_property
            .as_deref()
            .and_then(|prop| page.select_name(prop));

        Task::new(name, effort, start_date, end_date, category)
    }
}

/* Unparsable date: logged and treated as absent */
fn parse_date_field(page: &NotionPage, property: &str, tz: Tz, task_name: &str) -> Option<NaiveDate> {
    let raw: String = page.date_start(property)?;

    match parse_notion_date(&raw, tz) {
        Some(date) => Some(date),
        None => {
            warn!(
                "[Task->from_notion_page] '{}' has an unreadable '{}' value '{}'; ignoring it",
                task_name, property, raw
            );
            None
        }
    }
}
