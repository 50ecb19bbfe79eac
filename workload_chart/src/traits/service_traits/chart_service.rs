use crate::model::{allocation::allocation_grid::*, category::category::*};

pub trait ChartService: Send + Sync {
    #[doc = "
        Builds the chart image reference for a grid
        # Arguments
        * `labels`     - x-axis labels, one per day
        * `grid`       - allocated effort
        * `categories` - series names and colors, in display order
        * `summary`    - peak and totals used for the axis bound and the title
    "]
    fn render_chart_url(
        &self,
        labels: &[String],
        grid: &AllocationGrid,
        categories: &CategorySet,
        summary: &AllocationSummary,
    ) -> anyhow::Result<String>;
}
