use crate::common::*;

use crate::model::category::category::*;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn resolve_categories(&self) -> anyhow::Result<CategorySet>;
}
