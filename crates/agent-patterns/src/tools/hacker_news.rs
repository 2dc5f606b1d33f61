use std::sync::Arc;

use agent_patterns_core::tool::{Error as ToolError, Tool, ToolResult};
use reqwest::Client;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::Instrument;

/// The public Hacker News API.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Input of [`HackerNewsTool`].
#[derive(Deserialize, JsonSchema)]
pub struct HackerNewsToolParameters {
    #[schemars(description = "Number of top stories to fetch.")]
    top_n: usize,
}

#[derive(Debug, Default, Deserialize)]
struct Item {
    title: Option<String>,
    url: Option<String>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct StorySummary {
    title: String,
    url: String,
}

impl From<Item> for StorySummary {
    fn from(item: Item) -> Self {
        Self {
            title: item.title.unwrap_or_else(|| "No title".to_owned()),
            url: item.url.unwrap_or_else(|| "No URL available".to_owned()),
        }
    }
}

/// A tool fetching the current top stories from Hacker News.
///
/// The result is a JSON array of `{title, url}` objects, in ranking order.
pub struct HackerNewsTool {
    client: Client,
    base_url: Arc<str>,
    parameter_schema: Value,
}

impl HackerNewsTool {
    /// Creates a new tool talking to the public API.
    #[inline]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new tool talking to a mirror of the API at `base_url`.
    pub fn with_base_url(base_url: &str) -> Self {
        HackerNewsTool {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').into(),
            parameter_schema: schema_for!(HackerNewsToolParameters).to_value(),
        }
    }
}

impl Default for HackerNewsTool {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Tool for HackerNewsTool {
    type Input = HackerNewsToolParameters;

    fn name(&self) -> &str {
        "fetch_top_hacker_news_stories"
    }

    fn description(&self) -> &str {
        r#"
Fetch the top stories from Hacker News.
Returns the title and URL of each of the `top_n` highest ranked stories."#
    }

    fn parameter_schema(&self) -> &Value {
        &self.parameter_schema
    }

    fn execute(
        &self,
        input: HackerNewsToolParameters,
    ) -> impl Future<Output = ToolResult> + Send + 'static {
        let client = self.client.clone();
        let base_url = Arc::clone(&self.base_url);
        let top_n = input.top_n;
        async move {
            let stories = fetch_top_stories(&client, &base_url, top_n)
                .await
                .map_err(|err| {
                    warn!("failed to fetch stories: {err}");
                    ToolError::execution_error().with_reason(err.to_string())
                })?;
            serde_json::to_string(&stories).map_err(|err| {
                ToolError::execution_error().with_reason(err.to_string())
            })
        }
        .instrument(debug_span!("hacker news", top_n))
    }
}

async fn fetch_top_stories(
    client: &Client,
    base_url: &str,
    top_n: usize,
) -> Result<Vec<StorySummary>, reqwest::Error> {
    let ids: Vec<u64> = client
        .get(format!("{base_url}/topstories.json"))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let mut stories = Vec::with_capacity(top_n.min(ids.len()));
    for id in ids.into_iter().take(top_n) {
        trace!("fetching item {id}");
        // Deleted items come back as `null`.
        let item: Option<Item> = client
            .get(format!("{base_url}/item/{id}.json"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        stories.push(item.unwrap_or_default().into());
    }
    Ok(stories)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;

    /// Serves `routes` (path, JSON body) over HTTP, unknown paths get a 404.
    /// Returns the base URL of the API.
    async fn serve(routes: Vec<(&'static str, &'static str)>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0; 4096];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/");
                let response = match routes.iter().find(|(p, _)| *p == path) {
                    Some((_, body)) => format!(
                        "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\n\
                         content-length: {}\r\nconnection: close\r\n\r\n{body}",
                        body.len()
                    ),
                    None => "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\n\
                             connection: close\r\n\r\n"
                        .to_owned(),
                };
                stream.write_all(response.as_bytes()).await.ok();
                stream.shutdown().await.ok();
            }
        });
        format!("http://{addr}/v0")
    }

    #[tokio::test]
    async fn test_fetch_top_stories() {
        let base_url = serve(vec![
            ("/v0/topstories.json", "[8863, 121003, 9224]"),
            (
                "/v0/item/8863.json",
                r#"{"id":8863,"title":"My YC app: Dropbox","url":"http://www.getdropbox.com/u/2/screencast.html"}"#,
            ),
            // Deleted item.
            ("/v0/item/121003.json", "null"),
        ])
        .await;

        let tool = HackerNewsTool::with_base_url(&base_url);
        let output = tool
            .execute(HackerNewsToolParameters { top_n: 2 })
            .await
            .unwrap();
        let stories: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            stories,
            json!([
                {
                    "title": "My YC app: Dropbox",
                    "url": "http://www.getdropbox.com/u/2/screencast.html"
                },
                { "title": "No title", "url": "No URL available" }
            ])
        );

        let output = tool
            .execute(HackerNewsToolParameters { top_n: 0 })
            .await
            .unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_summary_defaults() {
        let item: Item = serde_json::from_value(json!({
            "id": 8863,
            "title": "My YC app: Dropbox",
            "type": "story"
        }))
        .unwrap();
        let summary = StorySummary::from(item);
        assert_eq!(summary.title, "My YC app: Dropbox");
        assert_eq!(summary.url, "No URL available");

        let summary = StorySummary::from(Item::default());
        assert_eq!(
            serde_json::to_value(&summary).unwrap(),
            json!({ "title": "No title", "url": "No URL available" })
        );
    }

    #[test]
    fn test_base_url() {
        let tool = HackerNewsTool::with_base_url("http://localhost:8080/v0/");
        assert_eq!(&*tool.base_url, "http://localhost:8080/v0");
        assert_eq!(tool.parameter_schema()["required"], json!(["top_n"]));
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        let tool = HackerNewsTool::with_base_url("http://127.0.0.1:9");
        let err = tool
            .execute(HackerNewsToolParameters { top_n: 2 })
            .await
            .unwrap_err();
        assert_eq!(
            err.kind(),
            agent_patterns_core::tool::ErrorKind::ExecutionError
        );
    }
}
