pub mod notion_repository;
