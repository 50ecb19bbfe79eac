pub mod allocation;
pub mod category;
pub mod configs;
pub mod task;
