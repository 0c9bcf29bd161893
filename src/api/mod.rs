//! REST Resource Client
//!
//! Generic CRUD bindings to the mock REST services, organized by resource.

mod comment;
mod post;
mod quote;
mod recipe;
mod todo;

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::{ListShape, ResourceConfig};
use crate::models::{Record, Resource};

pub use comment::*;
pub use post::*;
pub use quote::*;
pub use recipe::*;
pub use todo::*;

/// A failed request. Every variant means the same thing to callers: the call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response from {url}: {reason}")]
    Decode { url: String, reason: String },
}

impl ApiError {
    fn decode(url: &str, reason: impl ToString) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Pull the record array out of a list response
pub fn unwrap_collection<F: Resource>(body: Value, shape: ListShape) -> Result<Vec<Record<F>>, String> {
    let array = match (shape, body) {
        (ListShape::BareArray, array @ Value::Array(_)) => array,
        (ListShape::BareArray, other) => {
            return Err(format!("expected a JSON array, got {}", json_kind(&other)))
        }
        (ListShape::Envelope(field), Value::Object(mut map)) => match map.remove(field) {
            Some(array @ Value::Array(_)) => array,
            Some(other) => {
                return Err(format!("field `{}` is {}, not an array", field, json_kind(&other)))
            }
            None => return Err(format!("missing field `{}`", field)),
        },
        (ListShape::Envelope(field), other) => {
            return Err(format!(
                "expected an object with field `{}`, got {}",
                field,
                json_kind(&other)
            ))
        }
    };
    serde_json::from_value(array).map_err(|e| e.to_string())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a write echo, filling in `id` when the service leaves it out
pub fn decode_echo<F: Resource>(mut body: Value, id: Option<u32>) -> Result<Record<F>, String> {
    if let (Some(id), Value::Object(map)) = (id, &mut body) {
        map.entry("id").or_insert_with(|| Value::from(id));
    }
    serde_json::from_value(body).map_err(|e| e.to_string())
}

/// Typed CRUD client for one resource
pub struct ResourceClient<F> {
    http: reqwest::Client,
    config: ResourceConfig,
    _resource: PhantomData<fn() -> F>,
}

impl<F> Clone for ResourceClient<F> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            config: self.config,
            _resource: PhantomData,
        }
    }
}

impl<F: Resource> ResourceClient<F> {
    pub fn new(config: ResourceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            _resource: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<Record<F>>, ApiError> {
        let url = self.config.list_url();
        let body = self.send(&url, self.http.get(&url)).await?;
        let records = unwrap_collection(body, self.config.list_shape)
            .map_err(|reason| ApiError::decode(&url, reason))?;
        log::debug!(target: "api", "GET {} -> {} {}s", url, records.len(), F::LABEL);
        Ok(records)
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Record<F>, ApiError> {
        let url = self.config.item_url(id);
        let body = self.send(&url, self.http.get(&url)).await?;
        decode_echo(body, Some(id)).map_err(|reason| ApiError::decode(&url, reason))
    }

    /// Submit a new record. The echo is what the service claims it stored.
    pub async fn create<B: Serialize + ?Sized>(&self, draft: &B) -> Result<Record<F>, ApiError> {
        let url = self.config.create_url();
        let body = self.send(&url, self.http.post(&url).json(draft)).await?;
        decode_echo(body, None).map_err(|reason| ApiError::decode(&url, reason))
    }

    /// Submit a (possibly partial) update and return the service's merged echo
    pub async fn update<B: Serialize + ?Sized>(&self, id: u32, patch: &B) -> Result<Record<F>, ApiError> {
        let url = self.config.item_url(id);
        let body = self.send(&url, self.http.put(&url).json(patch)).await?;
        decode_echo(body, Some(id)).map_err(|reason| ApiError::decode(&url, reason))
    }

    /// Succeeds whenever the HTTP call does; the response body is ignored
    pub async fn delete(&self, id: u32) -> Result<(), ApiError> {
        let url = self.config.item_url(id);
        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check_status(&url, response.status())?;
        log::debug!(target: "api", "DELETE {} ok", url);
        Ok(())
    }

    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> Result<Value, ApiError> {
        let response = request.send().await.map_err(|e| transport(url, e))?;
        check_status(url, response.status())?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::decode(url, e))
    }
}

fn transport(url: &str, error: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        reason: error.to_string(),
    }
}

fn check_status(url: &str, status: reqwest::StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ApiError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Comment, Todo};
    use serde_json::json;

    #[test]
    fn test_unwrap_envelope() {
        let body = json!({
            "todos": [
                { "id": 1, "todo": "Do something nice", "completed": false, "userId": 152 },
                { "id": 2, "todo": "Memorize a poem", "completed": true, "userId": 13 }
            ],
            "total": 254,
            "skip": 0,
            "limit": 2
        });
        let todos = unwrap_collection::<Todo>(body, ListShape::Envelope("todos")).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].id, 2);
        assert!(todos[1].completed);
    }

    #[test]
    fn test_unwrap_envelope_wrong_field() {
        let body = json!({ "posts": [], "total": 0 });
        let err = unwrap_collection::<Todo>(body, ListShape::Envelope("todos")).unwrap_err();
        assert_eq!(err, "missing field `todos`");
    }

    #[test]
    fn test_unwrap_bare_array() {
        let body = json!([
            { "postId": 1, "id": 1, "name": "n", "email": "e@x.io", "body": "b" }
        ]);
        let comments = unwrap_collection::<Comment>(body, ListShape::BareArray).unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].email.as_deref(), Some("e@x.io"));
    }

    #[test]
    fn test_unwrap_bare_array_rejects_envelope() {
        let body = json!({ "comments": [] });
        let err = unwrap_collection::<Comment>(body, ListShape::BareArray).unwrap_err();
        assert_eq!(err, "expected a JSON array, got an object");
    }

    #[test]
    fn test_decode_echo_injects_missing_id() {
        let echo = decode_echo::<Todo>(json!({ "completed": true }), Some(5)).unwrap();
        assert_eq!(echo.id, 5);
        assert!(echo.completed);
    }

    #[test]
    fn test_decode_echo_keeps_server_id() {
        let echo = decode_echo::<Todo>(json!({ "id": 255, "todo": "x" }), Some(5)).unwrap();
        assert_eq!(echo.id, 255);
    }

    #[test]
    fn test_decode_echo_requires_id_on_create() {
        assert!(decode_echo::<Todo>(json!({ "todo": "x" }), None).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ApiError::Status {
            url: "https://dummyjson.com/todos/999".into(),
            status: 404,
        };
        assert_eq!(err.to_string(), "https://dummyjson.com/todos/999 responded with HTTP 404");
    }
}
