pub mod admin;
pub mod public;

use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ClientError;
use crate::models::TourPayload;

pub use admin::AdminClient;
pub use public::PublicClient;

/// Binary attachment for the create-tour path. Its presence alone decides
/// the wire encoding.
#[derive(Debug)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

pub enum RequestBody {
    Json(Value),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    pub fn json<T: serde::Serialize>(payload: &T) -> Result<Self, ClientError> {
        serde_json::to_value(payload)
            .map(RequestBody::Json)
            .map_err(ClientError::bad_payload)
    }

    /// One tour payload, two encodings: JSON without an attachment,
    /// multipart with one. Multipart carries `is_active` as text and skips
    /// empty optional fields.
    pub fn for_tour(
        payload: &TourPayload,
        attachment: Option<Attachment>,
    ) -> Result<Self, ClientError> {
        let Some(file) = attachment else {
            return RequestBody::json(payload);
        };

        let mut form = reqwest::multipart::Form::new()
            .text("title", payload.title.clone())
            .text("type", payload.tour_type.clone())
            .text("is_active", if payload.is_active { "true" } else { "false" });
        if let Some(price) = payload.price_from {
            form = form.text("price_from", price.to_string());
        }
        if let Some(hours) = payload.duration_hours {
            form = form.text("duration_hours", hours.to_string());
        }
        if let Some(description) = &payload.description {
            form = form.text("description", description.clone());
        }

        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.content_type)
            .map_err(|err| ClientError::Validation(format!("Некорректный файл: {err}")))?;

        Ok(RequestBody::Multipart(form.part("image", part)))
    }
}

/// Classify an upstream response the same way for both clients: non-2xx
/// keeps the server's own text, 204/empty means no body, and a body that
/// is not JSON comes back as plain text (some endpoints answer that way).
pub(crate) async fn classify(response: Response) -> Result<Option<Value>, ClientError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| ClientError::Network(err.to_string()))?;

    if !status.is_success() {
        return Err(ClientError::request(status.as_u16(), text));
    }
    if status == reqwest::StatusCode::NO_CONTENT || text.trim().is_empty() {
        return Ok(None);
    }
    match serde_json::from_str(&text) {
        Ok(value) => Ok(Some(value)),
        Err(_) => Ok(Some(Value::String(text))),
    }
}

pub(crate) fn decode_list<T: DeserializeOwned>(body: Option<Value>) -> Result<Vec<T>, ClientError> {
    let value = body.unwrap_or_else(|| Value::Array(Vec::new()));
    serde_json::from_value(value).map_err(ClientError::bad_payload)
}
