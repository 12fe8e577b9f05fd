// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, map the status code.
// ============================================================================

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, Proposal, ProposalDraft, ProposalId, RegisterRequest, ReviewForm,
};
use crate::services::auth_service::AuthApi;
use crate::services::proposal_service::ProposalApi;

/// REST client for the portal backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.backend_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn proposals_url(&self) -> String {
        format!("{}/proposals", self.base_url)
    }

    fn proposal_url(&self, id: ProposalId) -> String {
        format!("{}/proposals/{}", self.base_url, id)
    }

    /// Connectivity probe: lists proposals but gives up after `timeout_ms`.
    /// Returns how many proposals the backend knows about.
    pub async fn test_connection(&self, timeout_ms: u32) -> Result<usize, ApiError> {
        log::info!("🔗 [API] Probing {} ({} ms timeout)", self.base_url, timeout_ms);

        let probe = Box::pin(self.list_all(None));
        let timer = Box::pin(TimeoutFuture::new(timeout_ms));

        match select(probe, timer).await {
            Either::Left((result, _)) => result.map(|proposals| proposals.len()),
            Either::Right((_, _)) => {
                log::warn!("⏱️ [API] Probe timed out after {} ms", timeout_ms);
                Err(ApiError::Network(format!("timeout of {}ms exceeded", timeout_ms)))
            }
        }
    }
}

fn with_username(builder: RequestBuilder, username: Option<&str>) -> RequestBuilder {
    match username {
        Some(username) => builder.query([("username", username)]),
        None => builder,
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await
}

async fn send_json<B: Serialize + ?Sized>(
    builder: RequestBuilder,
    body: &B,
) -> Result<Response, ApiError> {
    let request = builder
        .header("X-Requested-With", "XMLHttpRequest")
        .json(body)
        .map_err(|e| ApiError::Decode(format!("Serialization error: {}", e)))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(response).await
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.ok();
    log::warn!("⚠️ [API] {} {} -> HTTP {}", response.url(), response.status_text(), status);
    Err(ApiError::from_status(status, body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/auth/login", self.base_url);
        log::info!("🔐 [AUTH] Logging in as {}", request.username);
        let response = send_json(Request::post(&url), request).await?;
        decode(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let url = format!("{}/auth/register", self.base_url);
        log::info!("📝 [AUTH] Registering {} as {}", request.username, request.role.as_str());
        send_json(Request::post(&url), request).await.map(|_| ())
    }
}

impl ProposalApi for ApiClient {
    async fn list_all(&self, username: Option<&str>) -> Result<Vec<Proposal>, ApiError> {
        let builder = with_username(Request::get(&self.proposals_url()), username);
        let proposals: Vec<Proposal> = decode(send(builder).await?).await?;
        log::info!("📋 [API] {} proposals loaded", proposals.len());
        Ok(proposals)
    }

    async fn create(
        &self,
        draft: &ProposalDraft,
        username: Option<&str>,
    ) -> Result<Proposal, ApiError> {
        let builder = with_username(Request::post(&self.proposals_url()), username);
        let created: Proposal = decode(send_json(builder, draft).await?).await?;
        log::info!("✅ [API] Proposal {} created", created.id);
        Ok(created)
    }

    async fn update(
        &self,
        id: ProposalId,
        draft: &ProposalDraft,
        username: Option<&str>,
    ) -> Result<Proposal, ApiError> {
        let builder = with_username(Request::put(&self.proposal_url(id)), username);
        decode(send_json(builder, draft).await?).await
    }

    async fn remove(&self, id: ProposalId, username: Option<&str>) -> Result<(), ApiError> {
        let builder = with_username(Request::delete(&self.proposal_url(id)), username);
        send(builder).await.map(|_| ())
    }

    async fn set_review(&self, id: ProposalId, review: &ReviewForm) -> Result<Proposal, ApiError> {
        let url = format!("{}/review", self.proposal_url(id));
        decode(send_json(Request::put(&url), review).await?).await
    }

    async fn list_trash(&self) -> Result<Vec<Proposal>, ApiError> {
        let url = format!("{}/trash", self.proposals_url());
        decode(send(Request::get(&url)).await?).await
    }

    async fn restore(&self, id: ProposalId) -> Result<Proposal, ApiError> {
        let url = format!("{}/restore", self.proposal_url(id));
        decode(send(Request::put(&url)).await?).await
    }
}
