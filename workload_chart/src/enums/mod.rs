pub mod effort_mode;
pub mod publish_status;
pub mod status_filter_kind;
