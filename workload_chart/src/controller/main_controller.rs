use crate::common::*;

use crate::utils_modules::time_utils::*;

use crate::model::{allocation::allocation_grid::*, category::category::*, task::task::*};

use crate::enums::publish_status::*;

use crate::traits::service_traits::{
    allocation_service::*, category_service::*, chart_service::*, embed_service::*,
    query_service::*,
};

#[derive(Debug, new)]
pub struct MainController<
    Q: QueryService,
    C: CategoryService,
    A: AllocationService,
    CH: ChartService,
    E: EmbedService,
> {
    query_service: Q,
    category_service: C,
    allocation_service: A,
    chart_service: CH,
    embed_service: E,
    reference_tz: Tz,
    num_days: usize,
    short_window: usize,
    run_timeout: Duration,
}

impl<Q, C, A, CH, E> MainController<Q, C, A, CH, E>
where
    Q: QueryService,
    C: CategoryService,
    A: AllocationService,
    CH: ChartService,
    E: EmbedService,
{
    #[doc = r#"
        One full publish run, bounded by the overall deadline.

        Day 0 is today's civil date in the reference timezone, taken once at the start so
        a run crossing midnight still produces a consistent chart.

        # Returns
        * `anyhow::Result<PublishStatus>` - whether the embed block was changed
    "#]
    pub async fn main_task(&self) -> anyhow::Result<PublishStatus> {
        let today: NaiveDate = civil_today(self.reference_tz);

        match timeout(self.run_timeout, self.run_pipeline(today)).await {
            Ok(result) => result,
            Err(_) => Err(anyhow!(
                "[MainController->main_task] Run did not finish within {} seconds",
                self.run_timeout.as_secs()
            )),
        }
    }

    #[doc = r#"
        1. Fetch every open task
        2. Resolve the category order (live schema + optional priority list)
        3. Allocate effort onto the category x day grid
        4. Render the chart URL
        5. Point the page's embed block at it if it changed
    "#]
    pub async fn run_pipeline(&self, today: NaiveDate) -> anyhow::Result<PublishStatus> {
        info!("Building workload chart for the {} days from {}", self.num_days, today);

        /* 1. Tasks */
        let tasks: Vec<Task> = self.query_service.fetch_open_tasks().await?;

        /* 2. Categories */
        let categories: CategorySet = self.category_service.resolve_categories().await?;

        /* 3. Allocation */
        let grid: AllocationGrid = self.allocation_service.allocate(&tasks, &categories, today);
        info!("Effort per day: {:?}", grid.day_totals());

        let summary: AllocationSummary = grid.summarize(self.short_window);
        info!(
            "Peak {} / next {} days {} / window {}",
            summary.peak(),
            self.short_window,
            summary.near_term_total(),
            summary.window_total()
        );

        /* 4. Chart */
        let labels: Vec<String> = make_day_labels(today, self.num_days);
        let chart_url: String =
            self.chart_service
                .render_chart_url(&labels, &grid, &categories, &summary)?;
        debug!("Chart url: {}", chart_url);

        /* 5. Publish */
        let status: PublishStatus = self.embed_service.publish_chart(&chart_url).await?;
        info!("Publish result: {}", status);

        Ok(status)
    }
}
