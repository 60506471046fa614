//! Browser `fetch` implementation of [`TodoApi`] via gloo-net.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::{todo_url, todos_url, TodoApi};
use crate::error::ApiError;
use crate::models::{CompletionPatch, CompletionUpdate, Task, UserFilter};

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpTodoApi {
    base: String,
}

impl HttpTodoApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl TodoApi for HttpTodoApi {
    async fn fetch_tasks(&self, filter: UserFilter) -> Result<Vec<Task>, ApiError> {
        let url = todos_url(&self.base, filter);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        decode(&url, response).await
    }

    async fn update_completion(&self, update: CompletionUpdate) -> Result<serde_json::Value, ApiError> {
        let url = todo_url(&self.base, update.id);
        let body = serde_json::to_string(&CompletionPatch::from(update))
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = Request::patch(&url)
            .header("Content-type", JSON_CONTENT_TYPE)
            .body(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| network_error(&url, e))?;
        decode(&url, response).await
    }
}

async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}

fn network_error(url: &str, err: gloo_net::Error) -> ApiError {
    ApiError::Network {
        url: url.to_string(),
        message: err.to_string(),
    }
}
