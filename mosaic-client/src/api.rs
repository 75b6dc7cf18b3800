//! HTTP access to the resource search and mutation endpoints.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use mosaic_model::{SearchParams, SearchResponse, UserMeta};

use crate::error::ApiError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bearer token for an authenticated session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
}

/// The remote operations the gallery consumes.
///
/// Only success/failure outcomes matter to the views; response semantics
/// beyond that stay with the server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceApi: Send + Sync {
    /// Fetch one page of search results.
    async fn find_resources(
        &self,
        params: SearchParams,
    ) -> Result<SearchResponse, ApiError>;

    /// Replace the user metadata of one resource.
    async fn update_user_meta(
        &self,
        resource_id: &str,
        meta: UserMeta,
    ) -> Result<(), ApiError>;

    /// Delete one resource.
    async fn delete_resource(&self, resource_id: &str) -> Result<(), ApiError>;

    /// Add and remove tags across a set of resources in one round trip.
    async fn bulk_update_tags(
        &self,
        resource_ids: Vec<String>,
        added: Vec<String>,
        removed: Vec<String>,
    ) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
struct BulkTagsRequest {
    resource_ids: Vec<String>,
    added: Vec<String>,
    removed: Vec<String>,
}

/// API client with authentication support.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_version: String,
    token_store: Arc<RwLock<Option<AuthToken>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into();
        debug!(%base_url, "creating api client");
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_version: "v1".to_string(),
            token_store: Arc::new(RwLock::new(None)),
        })
    }

    /// Build a versioned API URL.
    fn build_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/api/{}/{}", self.base_url, self.api_version, path)
    }

    /// Set or clear the authentication token.
    pub async fn set_token(&self, token: Option<AuthToken>) {
        *self.token_store.write().await = token;
    }

    pub async fn token(&self) -> Option<AuthToken> {
        self.token_store.read().await.clone()
    }

    /// Attach the bearer token when one is present.
    async fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.token_store.read().await.as_ref() {
            builder.bearer_auth(&token.access_token)
        } else {
            builder
        }
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.with_auth(request).await.send().await?;
        match response.status() {
            StatusCode::OK => Ok(response.json().await?),
            status => Err(self.status_error(status, response).await),
        }
    }

    async fn execute_no_content(
        &self,
        request: RequestBuilder,
    ) -> Result<(), ApiError> {
        let response = self.with_auth(request).await.send().await?;
        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            status => Err(self.status_error(status, response).await),
        }
    }

    async fn status_error(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        if status == StatusCode::UNAUTHORIZED {
            // Token might be expired, clear it.
            self.set_token(None).await;
            return ApiError::Unauthorized;
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        ApiError::Status {
            status: status.as_u16(),
            message,
        }
    }
}

#[async_trait]
impl ResourceApi for ApiClient {
    async fn find_resources(
        &self,
        params: SearchParams,
    ) -> Result<SearchResponse, ApiError> {
        let url = self.build_url("resources");
        debug!(%url, offset = params.offset, n = params.n, "find resources");
        let request = self.client.get(&url).query(&params.pairs());
        self.execute_json(request).await
    }

    async fn update_user_meta(
        &self,
        resource_id: &str,
        meta: UserMeta,
    ) -> Result<(), ApiError> {
        let url = self.build_url(&format!("resources/{resource_id}/meta"));
        let request = self.client.post(&url).json(&meta);
        self.execute_no_content(request).await
    }

    async fn delete_resource(&self, resource_id: &str) -> Result<(), ApiError> {
        let url = self.build_url(&format!("resources/{resource_id}"));
        let request = self.client.delete(&url);
        self.execute_no_content(request).await
    }

    async fn bulk_update_tags(
        &self,
        resource_ids: Vec<String>,
        added: Vec<String>,
        removed: Vec<String>,
    ) -> Result<(), ApiError> {
        let url = self.build_url("resources/bulk-tags");
        let body = BulkTagsRequest {
            resource_ids,
            added,
            removed,
        };
        let request = self.client.post(&url).json(&body);
        self.execute_no_content(request).await
    }
}
