pub mod allocation_service_impl;
pub mod category_service_impl;
pub mod chart_service_impl;
pub mod embed_service_impl;
pub mod query_service_impl;
