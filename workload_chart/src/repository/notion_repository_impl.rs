use crate::common::*;

use crate::dto::notion::{notion_block::*, notion_database::*, notion_list::*, notion_page::*};

use crate::traits::repository_traits::notion_repository::*;

pub const NOTION_VERSION: &str = "2022-06-28";
const QUERY_PAGE_SIZE: u32 = 100;
const CHILDREN_PAGE_SIZE: u32 = 50;

#[derive(Debug, Clone)]
pub struct NotionRepositoryImpl {
    client: Client,
    api_base: String,
    api_key: String,
}

impl NotionRepositoryImpl {
    pub fn new(api_base: &str, api_key: &str, request_timeout: Duration) -> anyhow::Result<Self> {
        let client: Client = Client::builder()
            .timeout(request_timeout)
            .build()
            .context("[NotionRepositoryImpl->new] Failed to build HTTP client")?;

        Ok(NotionRepositoryImpl {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/v1/{}", self.api_base, path)
    }

    #[doc = r#"
        Common logic: sends the request with Notion's auth/version headers, turns a
        non-2xx status into an error carrying the response body, and deserializes the
        success body into `T`.
    "#]
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        operation: &str,
    ) -> anyhow::Result<T> {
        let response: reqwest::Response = request
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .send()
            .await
            .map_err(|e| anyhow!("[Notion Error][{}] request failed: {}", operation, e))?;

        let status: StatusCode = response.status();

        if !status.is_success() {
            let error_body: String = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "[Notion Error][{}] response status is failed: {} {}",
                operation,
                status,
                error_body
            ));
        }

        let body: T = response.json::<T>().await.map_err(|e| {
            anyhow!(
                "[Notion Error][{}] Failed to decode response body: {}",
                operation,
                e
            )
        })?;

        Ok(body)
    }
}

#[async_trait]
impl NotionRepository for NotionRepositoryImpl {
    #[doc = "POST /v1/databases/{id}/query - one page of rows"]
    async fn query_database(
        &self,
        database_id: &str,
        filter: Option<&Value>,
        start_cursor: Option<&str>,
    ) -> anyhow::Result<NotionList<NotionPage>> {
        let mut body: Map<String, Value> = Map::new();
        body.insert("page_size".to_string(), json!(QUERY_PAGE_SIZE));

        if let Some(filter) = filter {
            body.insert("filter".to_string(), filter.clone());
        }

        if let Some(cursor) = start_cursor {
            body.insert("start_cursor".to_string(), json!(cursor));
        }

        let request = self
            .client
            .post(self.endpoint(&format!("databases/{}/query", database_id)))
            .json(&Value::Object(body));

        self.execute(request, "query_database").await
    }

    #[doc = "GET /v1/databases/{id} - schema including select options"]
    async fn retrieve_database(&self, database_id: &str) -> anyhow::Result<NotionDatabase> {
        let request = self
            .client
            .get(self.endpoint(&format!("databases/{}", database_id)));

        self.execute(request, "retrieve_database").await
    }

    #[doc = "GET /v1/blocks/{id}/children - one page of child blocks"]
    async fn list_block_children(
        &self,
        block_id: &str,
        start_cursor: Option<&str>,
    ) -> anyhow::Result<NotionList<NotionBlock>> {
        let mut query: Vec<(&str, String)> = vec![("page_size", CHILDREN_PAGE_SIZE.to_string())];

        if let Some(cursor) = start_cursor {
            query.push(("start_cursor", cursor.to_string()));
        }

        let request = self
            .client
            .get(self.endpoint(&format!("blocks/{}/children", block_id)))
            .query(&query);

        self.execute(request, "list_block_children").await
    }

    #[doc = "PATCH /v1/blocks/{id} - replaces the URL of an embed block"]
    async fn update_embed_url(&self, block_id: &str, url: &str) -> anyhow::Result<()> {
        let request = self
            .client
            .patch(self.endpoint(&format!("blocks/{}", block_id)))
            .json(&json!({ "embed": NotionEmbed::new(url.to_string()) }));

        let _updated: Value = self.execute(request, "update_embed_url").await?;

        info!("Embed block {} now points at the new chart", block_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn repo(server: &mockito::ServerGuard) -> NotionRepositoryImpl {
        NotionRepositoryImpl::new(&server.url(), "secret_key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn query_sends_filter_cursor_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let filter: Value = json!({ "property": "Status", "select": { "does_not_equal": "Done" } });

        let mock = server
            .mock("POST", "/v1/databases/db1/query")
            .match_header("authorization", "Bearer secret_key")
            .match_header("notion-version", NOTION_VERSION)
            .match_body(Matcher::Json(json!({
                "page_size": 100,
                "filter": filter.clone(),
                "start_cursor": "cur-1"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "results": [{ "id": "row-1", "properties": {} }],
                    "has_more": false,
                    "next_cursor": null
                })
                .to_string(),
            )
            .create_async()
            .await;

        let list = repo(&server)
            .query_database("db1", Some(&filter), Some("cur-1"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(list.results.len(), 1);
        assert_eq!(list.results[0].id, "row-1");
        assert_eq!(list.continuation(), None);
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/v1/databases/db1")
            .with_status(401)
            .with_body(r#"{"code":"unauthorized"}"#)
            .create_async()
            .await;

        let err = repo(&server).retrieve_database("db1").await.unwrap_err();
        let msg: String = err.to_string();
        assert!(msg.contains("401"));
        assert!(msg.contains("unauthorized"));
    }

    #[tokio::test]
    async fn children_listing_passes_page_size_and_cursor() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/v1/blocks/page1/children")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("page_size".into(), "50".into()),
                Matcher::UrlEncoded("start_cursor".into(), "c9".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({
                    "results": [{ "id": "b1", "type": "embed", "embed": { "url": "https://x" } }],
                    "has_more": false
                })
                .to_string(),
            )
            .create_async()
            .await;

        let list = repo(&server)
            .list_block_children("page1", Some("c9"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(list.results[0].embed_url(), Some("https://x"));
    }

    #[tokio::test]
    async fn update_patches_embed_url() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("PATCH", "/v1/blocks/b1")
            .match_body(Matcher::Json(json!({ "embed": { "url": "https://chart/new" } })))
            .with_status(200)
            .with_body(r#"{"object":"block","id":"b1"}"#)
            .create_async()
            .await;

        repo(&server)
            .update_embed_url("b1", "https://chart/new")
            .await
            .unwrap();

        mock.assert_async().await;
    }
}
