use axum::extract::State;
use axum::response::Html;
use axum::Json;
use serde_json::Value;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{BookingForm, Tour};
use crate::state::AppState;
use crate::ui;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    match state.public.list_tours().await {
        Ok(tours) => Html(ui::render_catalog(&tours)),
        Err(err) => {
            error!("failed to load tours: {err}");
            Html(ui::render_catalog_error(
                "Не удалось загрузить туры. Попробуйте позже.",
            ))
        }
    }
}

pub async fn list_tours(State(state): State<AppState>) -> Result<Json<Vec<Tour>>, AppError> {
    Ok(Json(state.public.list_tours().await?))
}

pub async fn create_booking(
    State(state): State<AppState>,
    Json(form): Json<BookingForm>,
) -> Result<Json<Value>, AppError> {
    let booking = form.validate()?;
    let body = state.public.create_booking(&booking).await?;
    info!(
        "booking created: tour {} on {} for {}",
        booking.tour_id, booking.date_time, booking.people_count
    );
    Ok(Json(body.unwrap_or(Value::Null)))
}
