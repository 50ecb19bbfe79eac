use crate::common::*;

use crate::traits::{repository_traits::notion_repository::*, service_traits::embed_service::*};

use crate::dto::notion::{notion_block::*, notion_list::*};

use crate::enums::publish_status::*;

#[derive(Debug, new)]
pub struct EmbedServiceImpl<R: NotionRepository> {
    notion_repo: Arc<R>,
    page_id: String,
}

impl<R: NotionRepository> EmbedServiceImpl<R> {
    #[doc = r#"
        First `embed` block on the destination page, walking child pages as needed.

        # Errors
        A page without any embed block is a configuration error.
    "#]
    async fn find_embed_block(&self) -> anyhow::Result<(String, String)> {
        let mut cursor: Option<String> = None;

        loop {
            let list: NotionList<NotionBlock> = self
                .notion_repo
                .list_block_children(&self.page_id, cursor.as_deref())
                .await
                .context("[EmbedServiceImpl->find_embed_block] Failed to list page blocks")?;

            if let Some(block) = list.results.iter().find(|b| b.embed_url().is_some()) {
                let url: String = block.embed_url().unwrap_or_default().to_string();
                return Ok((block.id.clone(), url));
            }

            match list.continuation() {
                Some(next_cursor) => cursor = Some(next_cursor.to_string()),
                None => break,
            }
        }

        Err(anyhow!(
            "[EmbedServiceImpl->find_embed_block] Page '{}' has no embed block to update; add an embed block to the page first",
            self.page_id
        ))
    }
}

#[async_trait]
impl<R: NotionRepository> EmbedService for EmbedServiceImpl<R> {
    async fn publish_chart(&self, chart_url: &str) -> anyhow::Result<PublishStatus> {
        let (block_id, current_url) = self.find_embed_block().await?;

        if current_url == chart_url {
            info!("Embedded chart is already current; nothing to replace");
            return Ok(PublishStatus::Unchanged);
        }

        self.notion_repo
            .update_embed_url(&block_id, chart_url)
            .await
            .context("[EmbedServiceImpl->publish_chart] Failed to update embed block")?;

        Ok(PublishStatus::Replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::notion_repository_impl::*;
    use mockito::Matcher;

    fn service(server: &mockito::ServerGuard) -> EmbedServiceImpl<NotionRepositoryImpl> {
        let repo = NotionRepositoryImpl::new(&server.url(), "key", Duration::from_secs(5)).unwrap();
        EmbedServiceImpl::new(Arc::new(repo), "page1".to_string())
    }

    fn children(blocks: Value, next: Option<&str>) -> String {
        json!({
            "results": blocks,
            "has_more": next.is_some(),
            "next_cursor": next
        })
        .to_string()
    }

    #[tokio::test]
    async fn same_url_is_left_alone() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/v1/blocks/page1/children")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(children(
                json!([
                    { "id": "h1", "type": "heading_1", "heading_1": {} },
                    { "id": "e1", "type": "embed", "embed": { "url": "https://chart/a" } }
                ]),
                None,
            ))
            .create_async()
            .await;

        let patch = server
            .mock("PATCH", "/v1/blocks/e1")
            .expect(0)
            .create_async()
            .await;

        let status = service(&server).publish_chart("https://chart/a").await.unwrap();

        assert_eq!(status, PublishStatus::Unchanged);
        patch.assert_async().await;
    }

    #[tokio::test]
    async fn different_url_is_replaced() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/v1/blocks/page1/children")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(children(
                json!([{ "id": "e1", "type": "embed", "embed": { "url": "https://chart/old" } }]),
                None,
            ))
            .create_async()
            .await;

        let patch = server
            .mock("PATCH", "/v1/blocks/e1")
            .match_body(Matcher::Json(json!({ "embed": { "url": "https://chart/new" } })))
            .with_status(200)
            .with_body(r#"{"object":"block","id":"e1"}"#)
            .create_async()
            .await;

        let status = service(&server).publish_chart("https://chart/new").await.unwrap();

        assert_eq!(status, PublishStatus::Replaced);
        patch.assert_async().await;
    }

    #[tokio::test]
    async fn embed_on_second_page_is_found() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/v1/blocks/page1/children")
            .match_query(Matcher::Regex("^page_size=50$".into()))
            .with_status(200)
            .with_body(children(
                json!([{ "id": "p1", "type": "paragraph", "paragraph": {} }]),
                Some("next-1"),
            ))
            .create_async()
            .await;

        server
            .mock("GET", "/v1/blocks/page1/children")
            .match_query(Matcher::UrlEncoded("start_cursor".into(), "next-1".into()))
            .with_status(200)
            .with_body(children(
                json!([{ "id": "e2", "type": "embed", "embed": { "url": "https://chart/x" } }]),
                None,
            ))
            .create_async()
            .await;

        let status = service(&server).publish_chart("https://chart/x").await.unwrap();
        assert_eq!(status, PublishStatus::Unchanged);
    }

    #[tokio::test]
    async fn page_without_embed_is_a_configuration_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/v1/blocks/page1/children")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(children(
                json!([{ "id": "p1", "type": "paragraph", "paragraph": {} }]),
                None,
            ))
            .create_async()
            .await;

        let err = service(&server).publish_chart("https://chart/x").await.unwrap_err();
        assert!(err.to_string().contains("no embed block"));
    }
}
