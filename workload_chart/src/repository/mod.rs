pub mod notion_repository_impl;
