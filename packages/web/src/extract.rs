//! Request extractors: the per-visitor session record and request bodies.

use api::{auth, SessionData};
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use tower_sessions::Session;

use crate::error::AppError;

/// The visitor's [`SessionData`], loaded (or created with insecure defaults) before the
/// handler runs. Changes are only persisted by [`DemoSession::save`].
pub struct DemoSession {
    session: Session,
    pub data: SessionData,
}

impl DemoSession {
    pub async fn save(&self) -> Result<(), AppError> {
        auth::store(&self.session, &self.data).await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for DemoSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(status, message)| AppError::NoSession(status, message))?;
        let data = auth::load(&session).await?;
        Ok(Self { session, data })
    }
}

/// A body sent either as `application/json` or as an urlencoded form.
///
/// Form fields are collected into a JSON object first. A field that appears more than
/// once becomes an array of its values, so `a=1&a=2` reads like `{"a": ["1", "2"]}`.
pub struct FormOrJson<T>(pub T);

impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_json(&req) {
            let Json(value) = Json::<Value>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            value
        } else {
            let Form(fields) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            form_to_value(fields)
        };

        serde_json::from_value(value).map(FormOrJson).map_err(|e| {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Failed to deserialize the request body: {e}"),
            )
                .into_response()
        })
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/json"))
}

fn form_to_value(fields: Vec<(String, String)>) -> Value {
    let mut object = Map::new();
    for (name, value) in fields {
        match object.entry(name) {
            Entry::Vacant(slot) => {
                slot.insert(Value::String(value));
            }
            Entry::Occupied(mut slot) => match slot.get_mut() {
                Value::Array(values) => values.push(Value::String(value)),
                first => {
                    let previous = first.take();
                    *first = Value::Array(vec![previous, Value::String(value)]);
                }
            },
        }
    }
    Value::Object(object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_form_to_value_single_fields() {
        let value = form_to_value(pairs(&[("text", "hi"), ("author", "")]));
        assert_eq!(value, json!({"text": "hi", "author": ""}));
    }

    #[test]
    fn test_form_to_value_repeated_fields() {
        let value = form_to_value(pairs(&[("x", "on"), ("x", "on"), ("x", "off"), ("y", "1")]));
        assert_eq!(value, json!({"x": ["on", "on", "off"], "y": "1"}));
    }

    #[test]
    fn test_form_to_value_empty() {
        assert_eq!(form_to_value(Vec::new()), json!({}));
    }
}
