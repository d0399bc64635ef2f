use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::user::{NewUser, User};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not reach the record store: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("record store returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
    #[error("could not decode record store response: {0}")]
    Decode(String),
}

/// The hosted "Users" collection. Object safe so screens and services can be
/// exercised against an in-memory fake.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// GET /Users
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
    /// GET /Users/{id}
    async fn get_user(&self, id: u64) -> Result<User, StoreError>;
    /// POST /Users; only a 201 counts as created.
    async fn create_user(&self, user: &NewUser) -> Result<User, StoreError>;
    /// PUT /Users/{id}, replacing the record wholesale.
    async fn replace_user(&self, user: &User) -> Result<User, StoreError>;
}

pub struct HttpUserStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpUserStore {
    /// `base_url` points at the collection itself, e.g.
    /// `https://example.mockapi.io/Users`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn record_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url, id)
    }

    // Read the body once, then decide; failed decodes keep the raw body
    // around for diagnostics.
    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(StoreError::UnexpectedStatus { status, body });
        }
        serde_json::from_str(&body)
            .map_err(|e| StoreError::Decode(format!("{e}; raw body: {body}")))
    }
}

#[async_trait]
impl UserStore for HttpUserStore {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let response = self.client.get(&self.base_url).send().await?;
        Self::read_json(response).await
    }

    async fn get_user(&self, id: u64) -> Result<User, StoreError> {
        let response = self.client.get(self.record_url(id)).send().await?;
        Self::read_json(response).await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, StoreError> {
        let response = self.client.post(&self.base_url).json(user).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if status != StatusCode::CREATED {
            return Err(StoreError::UnexpectedStatus { status, body });
        }
        serde_json::from_str(&body)
            .map_err(|e| StoreError::Decode(format!("{e}; raw body: {body}")))
    }

    async fn replace_user(&self, user: &User) -> Result<User, StoreError> {
        let response = self
            .client
            .put(self.record_url(user.id))
            .json(user)
            .send()
            .await?;
        Self::read_json(response).await
    }
}
