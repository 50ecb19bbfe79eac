pub mod allocation_service;
pub mod category_service;
pub mod chart_service;
pub mod embed_service;
pub mod query_service;
