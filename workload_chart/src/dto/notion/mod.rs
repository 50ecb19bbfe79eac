pub mod notion_block;
pub mod notion_database;
pub mod notion_list;
pub mod notion_page;
