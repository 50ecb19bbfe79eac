/*
Author      : workload_chart developers
Create date : 2026-10-18
Description : Publishes a stacked bar chart of upcoming task effort from a Notion task
              database into an embed block on a Notion page.

History     : 2026-10-18 workload_chart developers       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::notion_repository_impl::*;

mod dto;

mod enums;

mod env_configuration;

mod traits;

mod model;
use model::configs::{app_config::*, chart_config::*};

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    allocation_service_impl::*, category_service_impl::*, chart_service_impl::*,
    embed_service_impl::*, query_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() {
    /* Global logger and .env */
    dotenv().ok();

    let _logger: LoggerHandle = match set_global_logger() {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("[main] Failed to start logger: {:?}", e);
            std::process::exit(1);
        }
    };

    info!("Workload chart run start!");

    let app_config: AppConfig = AppConfig::from_env().unwrap_or_else(|e| {
        error!("[main] Invalid configuration: {:?}", e);
        std::process::exit(1)
    });

    info!("Configuration: {:?}", app_config);

    let notion_repo: Arc<NotionRepositoryImpl> = match NotionRepositoryImpl::new(
        app_config.chart().notion_api_base(),
        app_config.notion().api_key(),
        Duration::from_secs(*app_config.chart().request_timeout_secs()),
    ) {
        Ok(repo) => Arc::new(repo),
        Err(e) => {
            error!("[main] An issue occurred while initializing the Notion client. {:?}", e);
            std::process::exit(1);
        }
    };

    /* Dependency injection */
    let chart_config: &ChartConfig = app_config.chart();
    let database_id: &str = app_config.notion().database_id();

    let query_service: QueryServiceImpl<NotionRepositoryImpl> = QueryServiceImpl::new(
        notion_repo.clone(),
        database_id.to_string(),
        chart_config.clone(),
        *app_config.reference_tz(),
    );

    let category_service: CategoryServiceImpl<NotionRepositoryImpl> = CategoryServiceImpl::new(
        notion_repo.clone(),
        database_id.to_string(),
        chart_config.category_property().clone(),
        chart_config.category_priority().clone(),
        chart_config.other_label().to_string(),
    );

    let allocation_service: AllocationServiceImpl =
        AllocationServiceImpl::new(*chart_config.effort_mode(), *chart_config.num_days());

    let chart_service: ChartServiceImpl = ChartServiceImpl::new(chart_config.clone());

    let embed_service: EmbedServiceImpl<NotionRepositoryImpl> =
        EmbedServiceImpl::new(notion_repo, app_config.notion().page_id().to_string());

    let main_controller: MainController<
        QueryServiceImpl<NotionRepositoryImpl>,
        CategoryServiceImpl<NotionRepositoryImpl>,
        AllocationServiceImpl,
        ChartServiceImpl,
        EmbedServiceImpl<NotionRepositoryImpl>,
    > = MainController::new(
        query_service,
        category_service,
        allocation_service,
        chart_service,
        embed_service,
        *app_config.reference_tz(),
        *chart_config.num_days(),
        *chart_config.short_window(),
        Duration::from_secs(*chart_config.run_timeout_secs()),
    );

    match main_controller.main_task().await {
        Ok(status) => {
            info!("Workload chart run finished: {}", status);
            println!("{}", status);
        }
        Err(e) => {
            error!("{:?}", e);
            std::process::exit(1);
        }
    }
}
