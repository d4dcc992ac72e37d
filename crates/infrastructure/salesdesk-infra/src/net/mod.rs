use crate::credentials::CredentialSource;
use reqwest::{Client, Method, RequestBuilder, Url};
use salesdesk_core::{RecordId, SaleDto, SalespersonDto};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Status-coded response from the record service.
///
/// `body` is `None` when the service answered with an empty body.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> Envelope<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            body: self.body.map(f),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("record service unreachable: {message}")]
    Transport { message: String },
    #[error("record service answered with status {status}")]
    Status { status: u16 },
    #[error("unexpected body (status {status}): {message}")]
    Decode { status: u16, message: String },
    #[error("credential unavailable: {0}")]
    Credentials(String),
    #[error("invalid record service url: {0}")]
    InvalidUrl(String),
}

impl GatewayError {
    /// Numeric status for display. Failures that never produced an HTTP status report `0`.
    pub fn status(&self) -> u16 {
        match self {
            GatewayError::Status { status } | GatewayError::Decode { status, .. } => *status,
            GatewayError::Transport { .. }
            | GatewayError::Credentials(_)
            | GatewayError::InvalidUrl(_) => 0,
        }
    }
}

/// One method per (resource, verb) pair of the record service.
///
/// Each call performs exactly one round trip when awaited: no retry, no
/// caching. Nothing is sent until the returned future is polled, and dropping
/// it abandons the request. Failures are returned untouched; interpreting them
/// is the caller's job.
#[async_trait::async_trait]
pub trait RecordGateway: Send + Sync {
    async fn list_sales(&self) -> Result<Envelope<Vec<SaleDto>>, GatewayError>;
    async fn list_salespeople(&self) -> Result<Envelope<Vec<SalespersonDto>>, GatewayError>;
    /// `id` is forwarded as given; it is not checked to be numeric.
    async fn fetch_salesperson(&self, id: &str) -> Result<Envelope<SalespersonDto>, GatewayError>;
    async fn create_sale(&self, sale: &SaleDto) -> Result<Envelope<SaleDto>, GatewayError>;
    async fn update_sale(
        &self,
        id: RecordId,
        sale: &SaleDto,
    ) -> Result<Envelope<SaleDto>, GatewayError>;
    async fn delete_sale(&self, id: RecordId) -> Result<Envelope<()>, GatewayError>;
    async fn delete_salesperson(&self, id: RecordId) -> Result<Envelope<()>, GatewayError>;
}

pub fn default_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("salesdesk/", env!("CARGO_PKG_VERSION")))
        .build()
}

fn is_dot_segment(segment: &str) -> bool {
    let lowered = segment.to_ascii_lowercase();
    matches!(lowered.as_str(), "." | ".." | "%2e" | ".%2e" | "%2e." | "%2e%2e")
}

/// reqwest-backed gateway for the record service.
pub struct HttpRecordGateway {
    client: Client,
    base: Url,
    credentials: Arc<dyn CredentialSource>,
}

/// Parse the base address and make sure it can take extra path segments.
pub fn parse_base_url(base_url: &str) -> Result<Url, GatewayError> {
    let url = Url::parse(base_url)
        .map_err(|e| GatewayError::InvalidUrl(format!("{base_url}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(GatewayError::InvalidUrl(format!(
            "{base_url}: cannot be used as a base"
        )));
    }
    Ok(url)
}

impl HttpRecordGateway {
    pub fn new(
        client: Client,
        base_url: &str,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, GatewayError> {
        Ok(Self {
            client,
            base: parse_base_url(base_url)?,
            credentials,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append `segments` to the base path.
    ///
    /// `.`, `..` and their percent-encoded spellings are refused: URL
    /// normalization would resolve them and address a different resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        if let Some(seg) = segments.iter().find(|s| is_dot_segment(s)) {
            return Err(GatewayError::InvalidUrl(format!(
                "'{seg}' cannot be used as a path segment"
            )));
        }
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GatewayError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty();
            for seg in segments {
                path.push(seg);
            }
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> Result<RequestBuilder, GatewayError> {
        debug!(%method, %url, "record request");
        let builder = self.client.request(method, url);
        Ok(match self.credentials.credential()? {
            Some(cred) => builder.basic_auth(cred.username, Some(cred.password)),
            None => builder,
        })
    }

    async fn send(&self, builder: RequestBuilder) -> Result<(u16, Vec<u8>), GatewayError> {
        let resp = builder.send().await.map_err(|e| {
            warn!("record request failed: {e}");
            GatewayError::Transport {
                message: e.to_string(),
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url = %resp.url(), "record service rejected request");
            return Err(GatewayError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await.map_err(|e| GatewayError::Transport {
            message: format!("reading body failed: {e}"),
        })?;
        Ok((status.as_u16(), bytes.to_vec()))
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<Envelope<T>, GatewayError> {
        let (status, bytes) = self.send(builder).await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Envelope { status, body: None });
        }
        let body = serde_json::from_slice(&bytes).map_err(|e| GatewayError::Decode {
            status,
            message: e.to_string(),
        })?;
        Ok(Envelope {
            status,
            body: Some(body),
        })
    }

    async fn send_empty(&self, builder: RequestBuilder) -> Result<Envelope<()>, GatewayError> {
        let (status, _) = self.send(builder).await?;
        Ok(Envelope { status, body: None })
    }
}

#[async_trait::async_trait]
impl RecordGateway for HttpRecordGateway {
    async fn list_sales(&self) -> Result<Envelope<Vec<SaleDto>>, GatewayError> {
        let url = self.endpoint(&["sale"])?;
        self.send_json(self.request(Method::GET, url)?).await
    }

    async fn list_salespeople(&self) -> Result<Envelope<Vec<SalespersonDto>>, GatewayError> {
        let url = self.endpoint(&["salesperson"])?;
        self.send_json(self.request(Method::GET, url)?).await
    }

    async fn fetch_salesperson(&self, id: &str) -> Result<Envelope<SalespersonDto>, GatewayError> {
        let url = self.endpoint(&["salesperson", id])?;
        self.send_json(self.request(Method::GET, url)?).await
    }

    async fn create_sale(&self, sale: &SaleDto) -> Result<Envelope<SaleDto>, GatewayError> {
        let url = self.endpoint(&["sale"])?;
        self.send_json(self.request(Method::POST, url)?.json(sale))
            .await
    }

    async fn update_sale(
        &self,
        id: RecordId,
        sale: &SaleDto,
    ) -> Result<Envelope<SaleDto>, GatewayError> {
        let url = self.endpoint(&["sale", &id.to_string()])?;
        self.send_json(self.request(Method::PUT, url)?.json(sale))
            .await
    }

    async fn delete_sale(&self, id: RecordId) -> Result<Envelope<()>, GatewayError> {
        let url = self.endpoint(&["sale", &id.to_string()])?;
        self.send_empty(self.request(Method::DELETE, url)?).await
    }

    async fn delete_salesperson(&self, id: RecordId) -> Result<Envelope<()>, GatewayError> {
        let url = self.endpoint(&["salesperson", &id.to_string()])?;
        self.send_empty(self.request(Method::DELETE, url)?).await
    }
}
