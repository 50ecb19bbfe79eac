use crate::common::*;

pub const DEFAULT_CATEGORY_COLOR: &str = "#9B9A97";

/* Notion option color token → chart fill color */
static NOTION_COLOR_PALETTE: once_lazy<HashMap<&'static str, &'static str>> = once_lazy::new(|| {
    HashMap::from([
        ("gray", "#9B9A97"),
        ("brown", "#937264"),
        ("orange", "#FFA344"),
        ("yellow", "#FFDC49"),
        ("green", "#4DAB9A"),
        ("blue", "#529CCA"),
        ("purple", "#9A6DD7"),
        ("pink", "#E255A1"),
        ("red", "#FF7369"),
    ])
});

#[doc = "Chart color for a Notion color token; anything unmapped becomes neutral gray"]
pub fn palette_color(token: Option<&str>) -> String {
    token
        .and_then(|t| NOTION_COLOR_PALETTE.get(t))
        .copied()
        .unwrap_or(DEFAULT_CATEGORY_COLOR)
        .to_string()
}

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct Category {
    name: String,
    display_order: usize,
    color: String,
}

#[doc = r#"
    Resolved categories in display order, with the catch-all bucket last.

    `display_order` of the i-th category is always `i`, so it doubles as the row index
    into the allocation grid.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct CategorySet {
    categories: Vec<Category>,
    other_index: usize,
    #[getset(skip)]
    index_by_name: HashMap<String, usize>,
}

impl CategorySet {
    #[doc = r#"
        Builds the set from `(name, color token)` pairs already in display order.

        Duplicate names keep their first position. If `other_label` is itself one of the
        names, that entry becomes the catch-all; otherwise a gray catch-all is appended.
    "#]
    pub fn from_ordered(entries: Vec<(String, Option<String>)>, other_label: &str) -> Self {
        let mut categories: Vec<Category> = Vec::new();
        let mut index_by_name: HashMap<String, usize> = HashMap::new();

        for (name, color_token) in entries {
            if index_by_name.contains_key(&name) {
                warn!("[CategorySet->from_ordered] Duplicate category '{}' ignored", name);
                continue;
            }

            let display_order: usize = categories.len();
            index_by_name.insert(name.clone(), display_order);
            categories.push(Category::new(
                name,
                display_order,
                palette_color(color_token.as_deref()),
            ));
        }

        let other_index: usize = match index_by_name.get(other_label) {
            Some(idx) => *idx,
            None => {
                let display_order: usize = categories.len();
                index_by_name.insert(other_label.to_string(), display_order);
                categories.push(Category::new(
                    other_label.to_string(),
                    display_order,
                    DEFAULT_CATEGORY_COLOR.to_string(),
                ));
                display_order
            }
        };

        CategorySet {
            categories,
            other_index,
            index_by_name,
        }
    }

    #[doc = "Only the catch-all bucket"]
    pub fn other_only(other_label: &str) -> Self {
        Self::from_ordered(Vec::new(), other_label)
    }

    #[doc = "Grid row for a task's category; missing or unknown names land in the catch-all"]
    pub fn bucket_index(&self, name: Option<&str>) -> usize {
        name.and_then(|n| self.index_by_name.get(n))
            .copied()
            .unwrap_or(self.other_index)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}
