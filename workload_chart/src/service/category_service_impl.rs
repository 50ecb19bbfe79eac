use crate::common::*;

use crate::traits::{
    repository_traits::notion_repository::*, service_traits::category_service::*,
};

use crate::dto::notion::notion_database::*;

use crate::model::category::category::*;

#[derive(Debug, new)]
pub struct CategoryServiceImpl<R: NotionRepository> {
    notion_repo: Arc<R>,
    database_id: String,
    category_property: Option<String>,
    category_priority: Option<Vec<String>>,
    other_label: String,
}

#[doc = r#"
    Orders schema options for display.

    A priority list is only honoured when it names exactly the same set of categories
    as the live schema. Any drift between the two (missing, extra or renamed entries)
    falls back to schema declaration order.

    # Arguments
    * `options`     - select options in schema declaration order
    * `priority`    - optional preferred order
    * `other_label` - name of the catch-all bucket

    # Returns
    * `CategorySet` - dense display order, catch-all last
"#]
pub fn resolve_category_order(
    options: &[NotionSelectOption],
    priority: Option<&[String]>,
    other_label: &str,
) -> CategorySet {
    let schema_entries: Vec<(String, Option<String>)> = options
        .iter()
        .map(|opt| (opt.name.clone(), opt.color.clone()))
        .collect();

    let priority: &[String] = match priority {
        Some(priority) if !priority.is_empty() => priority,
        _ => return CategorySet::from_ordered(schema_entries, other_label),
    };

    let schema_names: HashSet<&str> = options.iter().map(|opt| opt.name.as_str()).collect();
    let priority_names: HashSet<&str> = priority.iter().map(|name| name.as_str()).collect();

    if schema_names != priority_names || priority_names.len() != priority.len() {
        warn!(
            "[CategoryServiceImpl->resolve_category_order] Priority list {:?} does not match schema categories {:?}; using schema order",
            priority,
            options.iter().map(|opt| opt.name.as_str()).collect::<Vec<&str>>()
        );
        return CategorySet::from_ordered(schema_entries, other_label);
    }

    let color_by_name: HashMap<&str, Option<String>> = options
        .iter()
        .map(|opt| (opt.name.as_str(), opt.color.clone()))
        .collect();

    let prioritized: Vec<(String, Option<String>)> = priority
        .iter()
        .map(|name| {
            let color: Option<String> = color_by_name.get(name.as_str()).cloned().flatten();
            (name.clone(), color)
        })
        .collect();

    CategorySet::from_ordered(prioritized, other_label)
}

#[async_trait]
impl<R: NotionRepository> CategoryService for CategoryServiceImpl<R> {
    async fn resolve_categories(&self) -> anyhow::Result<CategorySet> {
        let property: &str = match self.category_property.as_deref() {
            Some(property) => property,
            None => {
                info!("No category property configured; every task goes to '{}'", self.other_label);
                return Ok(CategorySet::other_only(&self.other_label));
            }
        };

        let database: NotionDatabase = self
            .notion_repo
            .retrieve_database(&self.database_id)
            .await
            .context("[CategoryServiceImpl->resolve_categories] Failed to read database schema")?;

        let options: Vec<NotionSelectOption> = database.select_options(property)?;

        let categories: CategorySet = resolve_category_order(
            &options,
            self.category_priority.as_deref(),
            &self.other_label,
        );

        info!(
            "Resolved categories: {:?}",
            categories
                .categories()
                .iter()
                .map(|c| c.name().as_str())
                .collect::<Vec<&str>>()
        );

        Ok(categories)
    }
}
