//! Reply service client.
//!
//! The reply service is an external HTTP endpoint:
//!
//! - `POST /api/chat` with `{"message": "..."}`
//! - any 2xx answers `{"reply": "..."}`
//!
//! Anything else is a [`ReplyError`].

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ReplyError;

/// Path of the chat endpoint on the reply service.
pub const CHAT_PATH: &str = "/api/chat";

/// Request body sent to the reply service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// User message content.
    pub message: String,
}

/// Successful response from the reply service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant reply text.
    pub reply: String,
}

/// Source of assistant replies.
#[async_trait]
pub trait ReplyService: Send + Sync + std::fmt::Debug {
    /// Obtain a reply for a single user message.
    async fn reply(&self, message: &str) -> Result<String, ReplyError>;
}

/// [`ReplyService`] backed by the HTTP reply endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use ilmai::chat::{HttpReplyClient, ReplyService};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpReplyClient::new("http://localhost:5000")?;
/// let reply = client.reply("What is Zakat?").await?;
/// println!("{reply}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpReplyClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl HttpReplyClient {
    /// Create a client for the reply service at `base_url`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ReplyError> {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(base_url: impl AsRef<str>, http: reqwest::Client) -> Result<Self, ReplyError> {
        let endpoint = Url::parse(base_url.as_ref())?.join(CHAT_PATH)?;
        Ok(Self { endpoint, http })
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ReplyService for HttpReplyClient {
    async fn reply(&self, message: &str) -> Result<String, ReplyError> {
        let req = ChatRequest {
            message: message.to_string(),
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReplyError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatReply = response.json().await?;
        Ok(body.reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use tokio::net::TcpListener;

    async fn spawn_stub(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn endpoint_joins_chat_path() {
        let client = HttpReplyClient::new("http://localhost:5000").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:5000/api/chat");
    }

    #[test]
    fn rejects_bad_base_url() {
        let err = HttpReplyClient::new("not a url").unwrap_err();
        assert!(matches!(err, ReplyError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn returns_reply_on_success() {
        let app = Router::new().route(
            CHAT_PATH,
            post(|Json(req): Json<ChatRequest>| async move {
                Json(ChatReply {
                    reply: format!("echo: {}", req.message),
                })
            }),
        );
        let base = spawn_stub(app).await;

        let client = HttpReplyClient::new(&base).unwrap();
        let reply = client.reply("What is Zakat?").await.unwrap();
        assert_eq!(reply, "echo: What is Zakat?");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let app = Router::new().route(
            CHAT_PATH,
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn_stub(app).await;

        let err = HttpReplyClient::new(&base)
            .unwrap()
            .reply("hello")
            .await
            .unwrap_err();
        assert!(matches!(err, ReplyError::Status { status: 503 }));
    }

    #[tokio::test]
    async fn accepts_any_2xx() {
        let app = Router::new().route(
            CHAT_PATH,
            post(|| async {
                (
                    StatusCode::CREATED,
                    Json(ChatReply {
                        reply: "created".into(),
                    }),
                )
            }),
        );
        let base = spawn_stub(app).await;

        let reply = HttpReplyClient::new(&base).unwrap().reply("x").await.unwrap();
        assert_eq!(reply, "created");
    }

    #[tokio::test]
    async fn malformed_body_is_an_error() {
        let app = Router::new().route(CHAT_PATH, post(|| async { "not json" }));
        let base = spawn_stub(app).await;

        let err = HttpReplyClient::new(&base)
            .unwrap()
            .reply("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ReplyError::Transport(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_an_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = HttpReplyClient::new(format!("http://{addr}"))
            .unwrap()
            .reply("x")
            .await
            .unwrap_err();
        assert!(matches!(err, ReplyError::Transport(_)));
    }
}
