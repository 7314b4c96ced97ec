//! HTTP transport for `POST /api/agent/` (multipart in, JSON out).

use std::{
    sync::{mpsc::Sender, Arc},
    time::Duration,
};

use reqwest::{
    multipart::{Form, Part},
    Client, Url,
};
use tokio::runtime::{Builder, Runtime};

use crate::{
    domain::{events::AppEvent, reply::AgentReply},
    infra::{config::AgentConfig, error::AppError},
};

use super::{wire, AgentRequest, AgentTransport, AgentTransportError};

const AGENT_REQUEST_DISPATCHED: &str = "AGENT_REQUEST_DISPATCHED";
const AGENT_REQUEST_SETTLED: &str = "AGENT_REQUEST_SETTLED";
const AGENT_REPLY_DELIVERY_FAILED: &str = "AGENT_REPLY_DELIVERY_FAILED";

/// Resolves the agent endpoint from `base_url` and `endpoint_path`.
pub fn endpoint_url(config: &AgentConfig) -> Result<Url, AppError> {
    let invalid = |details: String| AppError::InvalidAgentUrl {
        url: config.base_url.clone(),
        details,
    };

    let base = Url::parse(&config.base_url).map_err(|error| invalid(error.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme `{}`", base.scheme())));
    }

    base.join(&config.endpoint_path)
        .map_err(|error| invalid(error.to_string()))
}

#[derive(Debug, Clone)]
pub struct HttpAgentClient {
    client: Client,
    endpoint: Url,
}

impl HttpAgentClient {
    pub fn new(config: &AgentConfig) -> Result<Self, AppError> {
        let endpoint = endpoint_url(config)?;

        let mut builder = Client::builder();
        if config.request_timeout_ms > 0 {
            builder = builder.timeout(Duration::from_millis(config.request_timeout_ms));
        }
        let client = builder.build().map_err(AppError::HttpClientInit)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Performs one exchange. Every failure is folded into the reply.
    pub async fn exchange(&self, request: &AgentRequest) -> AgentReply {
        match self.try_exchange(request).await {
            Ok(reply) => reply,
            Err(error) => AgentReply::TransportError(error.to_string()),
        }
    }

    async fn try_exchange(&self, request: &AgentRequest) -> Result<AgentReply, AgentTransportError> {
        let form = build_form(request).await?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(AgentTransportError::Request)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(AgentTransportError::Request)?;

        wire::interpret(status, &body)
    }
}

async fn build_form(request: &AgentRequest) -> Result<Form, AgentTransportError> {
    let mut form = Form::new().text("message", request.message.clone());

    if let Some(session_id) = &request.session_id {
        form = form.text("session_id", session_id.clone());
    }

    if let Some(attachment) = &request.attachment {
        let name = attachment.file_name();
        let bytes = tokio::fs::read(attachment.path())
            .await
            .map_err(|source| AgentTransportError::AttachmentRead {
                name: name.clone(),
                source,
            })?;
        form = form.part("file", Part::bytes(bytes).file_name(name));
    }

    Ok(form)
}

/// Runs exchanges on a private runtime and posts outcomes back to the UI loop.
pub struct HttpAgentTransport {
    runtime: Runtime,
    client: Arc<HttpAgentClient>,
    reply_tx: Sender<AppEvent>,
}

impl HttpAgentTransport {
    pub fn new(config: &AgentConfig, reply_tx: Sender<AppEvent>) -> Result<Self, AppError> {
        let client = HttpAgentClient::new(config)?;
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("agent-http")
            .enable_all()
            .build()
            .map_err(AppError::RuntimeInit)?;

        Ok(Self {
            runtime,
            client: Arc::new(client),
            reply_tx,
        })
    }
}

impl AgentTransport for HttpAgentTransport {
    fn submit(&self, request_id: u64, request: AgentRequest) {
        tracing::info!(
            code = AGENT_REQUEST_DISPATCHED,
            request_id,
            endpoint = %self.client.endpoint(),
            message_chars = request.message.chars().count(),
            has_session = request.session_id.is_some(),
            has_attachment = request.attachment.is_some(),
            "agent request dispatched"
        );

        let client = Arc::clone(&self.client);
        let reply_tx = self.reply_tx.clone();
        self.runtime.spawn(async move {
            let reply = client.exchange(&request).await;
            tracing::info!(
                code = AGENT_REQUEST_SETTLED,
                request_id,
                outcome = reply.kind(),
                "agent request settled"
            );

            if let Err(error) = reply_tx.send(AppEvent::AgentReplied { request_id, reply }) {
                tracing::warn!(
                    code = AGENT_REPLY_DELIVERY_FAILED,
                    request_id,
                    error = %error,
                    "agent reply dropped: UI loop is gone"
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;
    use crate::domain::{attachment::PendingAttachment, session::SessionId};

    fn config_for(server: &MockServer) -> AgentConfig {
        AgentConfig {
            base_url: server.uri(),
            ..AgentConfig::default()
        }
    }

    fn request(message: &str) -> AgentRequest {
        AgentRequest {
            message: message.to_owned(),
            session_id: None,
            attachment: None,
        }
    }

    async fn only_request_body(server: &MockServer) -> String {
        let requests = server
            .received_requests()
            .await
            .expect("request recording is enabled");
        assert_eq!(requests.len(), 1, "exactly one request must be sent");
        String::from_utf8_lossy(&requests[0].body).into_owned()
    }

    async fn mount_success(server: &MockServer) {
        Mock::given(method("POST"))
            .and(path("/api/agent/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "session_id": "abc123",
                "assistant_message": {"role": "assistant", "content": "hi"}
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn endpoint_url_joins_base_and_path() {
        let config = AgentConfig {
            base_url: "http://localhost:8000".to_owned(),
            ..AgentConfig::default()
        };

        let url = endpoint_url(&config).expect("url should resolve");

        assert_eq!(url.as_str(), "http://localhost:8000/api/agent/");
    }

    #[test]
    fn endpoint_url_rejects_non_http_scheme() {
        let config = AgentConfig {
            base_url: "ftp://localhost".to_owned(),
            ..AgentConfig::default()
        };

        let error = endpoint_url(&config).expect_err("scheme must be rejected");

        assert!(error.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn endpoint_url_rejects_garbage() {
        let config = AgentConfig {
            base_url: "not a url".to_owned(),
            ..AgentConfig::default()
        };

        assert!(matches!(
            endpoint_url(&config),
            Err(AppError::InvalidAgentUrl { .. })
        ));
    }

    #[tokio::test]
    async fn first_exchange_sends_message_only_and_adopts_session() {
        let server = MockServer::start().await;
        mount_success(&server).await;
        let client = HttpAgentClient::new(&config_for(&server)).expect("client");

        let reply = client.exchange(&request("hello")).await;

        assert_eq!(
            reply,
            AgentReply::Success {
                session_id: SessionId::new("abc123"),
                content: "hi".to_owned(),
            }
        );
        let body = only_request_body(&server).await;
        assert!(body.contains("name=\"message\""));
        assert!(body.contains("hello"));
        assert!(!body.contains("name=\"session_id\""));
        assert!(!body.contains("name=\"file\""));
    }

    #[tokio::test]
    async fn established_session_is_sent_as_form_field() {
        let server = MockServer::start().await;
        mount_success(&server).await;
        let client = HttpAgentClient::new(&config_for(&server)).expect("client");

        let mut outgoing = request("again");
        outgoing.session_id = Some("abc123".to_owned());
        client.exchange(&outgoing).await;

        let body = only_request_body(&server).await;
        assert!(body.contains("name=\"session_id\""));
        assert!(body.contains("abc123"));
    }

    #[tokio::test]
    async fn attachment_is_sent_as_file_part_with_empty_message() {
        let server = MockServer::start().await;
        mount_success(&server).await;
        let client = HttpAgentClient::new(&config_for(&server)).expect("client");

        let dir = tempfile::tempdir().expect("temp dir");
        let file_path = dir.path().join("notes.txt");
        let mut file = std::fs::File::create(&file_path).expect("create attachment");
        file.write_all(b"quarterly numbers").expect("write attachment");

        let mut outgoing = request("");
        outgoing.attachment = Some(PendingAttachment::new(&file_path));
        client.exchange(&outgoing).await;

        let body = only_request_body(&server).await;
        assert!(body.contains("name=\"message\""));
        assert!(body.contains("name=\"file\"; filename=\"notes.txt\""));
        assert!(body.contains("quarterly numbers"));
    }

    #[tokio::test]
    async fn non_success_status_surfaces_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/agent/"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "bad request"})),
            )
            .mount(&server)
            .await;
        let client = HttpAgentClient::new(&config_for(&server)).expect("client");

        let reply = client.exchange(&request("hello")).await;

        assert_eq!(reply, AgentReply::ServerError("bad request".to_owned()));
        assert_eq!(reply.transcript_text(), "Error: bad request");
    }

    async fn mount_slow_success(server: &MockServer, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/agent/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({
                        "session_id": "abc123",
                        "assistant_message": {"content": "late"}
                    }))
                    .set_delay(delay),
            )
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn configured_timeout_turns_slow_backend_into_transport_error() {
        let server = MockServer::start().await;
        mount_slow_success(&server, Duration::from_secs(2)).await;
        let config = AgentConfig {
            request_timeout_ms: 50,
            ..config_for(&server)
        };
        let client = HttpAgentClient::new(&config).expect("client");

        let reply = client.exchange(&request("hello")).await;

        assert!(matches!(reply, AgentReply::TransportError(_)));
        assert!(reply.transcript_text().starts_with("Error: "));
    }

    #[tokio::test]
    async fn zero_timeout_waits_for_slow_backend() {
        let server = MockServer::start().await;
        mount_slow_success(&server, Duration::from_millis(300)).await;
        let config = AgentConfig {
            request_timeout_ms: 0,
            ..config_for(&server)
        };
        let client = HttpAgentClient::new(&config).expect("client");

        let reply = client.exchange(&request("hello")).await;

        assert_eq!(
            reply,
            AgentReply::Success {
                session_id: SessionId::new("abc123"),
                content: "late".to_owned(),
            }
        );
    }

    #[tokio::test]
    async fn refused_connection_becomes_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
        let port = listener.local_addr().expect("probe addr").port();
        drop(listener);

        let config = AgentConfig {
            base_url: format!("http://127.0.0.1:{port}"),
            ..AgentConfig::default()
        };
        let client = HttpAgentClient::new(&config).expect("client");

        let reply = client.exchange(&request("hello")).await;

        assert!(matches!(reply, AgentReply::TransportError(_)));
        let text = reply.transcript_text();
        assert!(text.starts_with("Error: "));
        assert!(text.len() > "Error: ".len());
    }

    #[tokio::test]
    async fn unreadable_attachment_fails_before_any_request() {
        let server = MockServer::start().await;
        mount_success(&server).await;
        let client = HttpAgentClient::new(&config_for(&server)).expect("client");

        let mut outgoing = request("");
        outgoing.attachment = Some(PendingAttachment::new("/definitely/missing/report.pdf"));
        let reply = client.exchange(&outgoing).await;

        assert!(reply
            .transcript_text()
            .starts_with("Error: failed to read attachment report.pdf"));
        let requests = server.received_requests().await.expect("recording enabled");
        assert!(requests.is_empty());
    }

    #[test]
    fn transport_posts_reply_event_with_request_id() {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("test runtime");
        let server = runtime.block_on(async {
            let server = MockServer::start().await;
            mount_success(&server).await;
            server
        });

        let (tx, rx) = std::sync::mpsc::channel();
        let transport = HttpAgentTransport::new(&config_for(&server), tx).expect("transport");

        transport.submit(7, request("hello"));
        let event = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("reply event should arrive");

        assert_eq!(
            event,
            AppEvent::AgentReplied {
                request_id: 7,
                reply: AgentReply::Success {
                    session_id: SessionId::new("abc123"),
                    content: "hi".to_owned(),
                },
            }
        );
    }
}
