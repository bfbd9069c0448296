use axum::extract::{FromRequest, Multipart, Path, Query, Request, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::Attachment;
use crate::errors::{AppError, ClientError};
use crate::models::{Booking, BookingStatus, SessionForm, Tour, TourForm, TourPatchForm};
use crate::state::AppState;
use crate::ui;

pub async fn console() -> Html<&'static str> {
    Html(ui::ADMIN_HTML)
}

pub async fn session_status(State(state): State<AppState>) -> Json<Value> {
    let present = state.admin.session().get().await.is_some();
    Json(json!({ "present": present }))
}

pub async fn save_session(
    State(state): State<AppState>,
    Json(form): Json<SessionForm>,
) -> Result<StatusCode, AppError> {
    let token = form.token.trim();
    if token.is_empty() {
        return Err(ClientError::Validation("Введите токен.".to_string()).into());
    }
    state.admin.session().set(token).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn clear_session(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.admin.session().clear().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_tours(State(state): State<AppState>) -> Result<Json<Vec<Tour>>, AppError> {
    Ok(Json(state.admin.list_tours().await?))
}

/// Create accepts two encodings from the console form: JSON when no file
/// is attached, multipart when one is.
pub async fn create_tour(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Value>, AppError> {
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_string();

    let (payload, attachment) = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(request, &())
            .await
            .map_err(|err| AppError::bad_request(err.to_string()))?;
        read_tour_multipart(multipart).await?
    } else {
        let Json(form) = Json::<TourForm>::from_request(request, &())
            .await
            .map_err(|err| AppError::bad_request(err.to_string()))?;
        (form.validate()?, None)
    };

    let body = state.admin.create_tour(&payload, attachment).await?;
    Ok(Json(body.unwrap_or(Value::Null)))
}

async fn read_tour_multipart(
    mut multipart: Multipart,
) -> Result<(crate::models::TourPayload, Option<Attachment>), AppError> {
    let mut form = TourForm::default();
    let mut attachment = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let filename = field.file_name().unwrap_or("upload").to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|err| AppError::bad_request(err.to_string()))?;
            if !bytes.is_empty() {
                attachment = Some(Attachment {
                    filename,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|err| AppError::bad_request(err.to_string()))?;
        match name.as_str() {
            "title" => form.title = value,
            "type" => form.tour_type = value,
            "price_from" => form.price_from = value,
            "duration_hours" => form.duration_hours = value,
            "description" => form.description = value,
            "is_active" => form.is_active = value == "true" || value == "on",
            _ => {}
        }
    }

    Ok((form.validate()?, attachment))
}

pub async fn update_tour(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<TourPatchForm>,
) -> Result<Json<Value>, AppError> {
    let patch = form.validate()?;
    let body = state.admin.update_tour(id, &patch).await?;
    Ok(Json(body.unwrap_or(Value::Null)))
}

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    #[serde(default)]
    pub status: String,
}

pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let filter = match query.status.trim() {
        "" => None,
        raw => Some(BookingStatus::parse(raw).ok_or_else(|| {
            ClientError::Validation(format!("Неизвестный статус: {raw}"))
        })?),
    };
    Ok(Json(state.admin.list_bookings(filter).await?))
}

pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<crate::models::StatusForm>,
) -> Result<Json<Value>, AppError> {
    let status = BookingStatus::parse(form.status.trim()).ok_or_else(|| {
        ClientError::Validation(format!("Недопустимый статус: {}", form.status))
    })?;
    let body = state.admin.update_booking_status(id, status).await?;
    Ok(Json(body.unwrap_or(Value::Null)))
}
