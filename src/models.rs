use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// Tour offering as the backend reports it. The client keeps no state of
/// its own; these structs only mirror one response at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub tour_type: TourType,
    #[serde(default)]
    pub price_from: Option<f64>,
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TourType {
    Jeeping,
    Yacht,
    Excursion,
    Other(String),
}

impl TourType {
    pub fn as_str(&self) -> &str {
        match self {
            TourType::Jeeping => "jeeping",
            TourType::Yacht => "yacht",
            TourType::Excursion => "excursion",
            TourType::Other(raw) => raw,
        }
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            TourType::Jeeping => "ADVENTURE",
            TourType::Yacht => "VIP",
            TourType::Excursion => "POPULAR",
            TourType::Other(_) => "TOUR",
        }
    }
}

impl From<String> for TourType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "jeeping" => TourType::Jeeping,
            "yacht" => TourType::Yacht,
            "excursion" => TourType::Excursion,
            _ => TourType::Other(value),
        }
    }
}

impl From<TourType> for String {
    fn from(value: TourType) -> Self {
        match value {
            TourType::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    New,
    Confirmed,
    Done,
    Cancelled,
}

impl BookingStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "new" => Some(BookingStatus::New),
            "confirmed" => Some(BookingStatus::Confirmed),
            "done" => Some(BookingStatus::Done),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::New => "new",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Done => "done",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Booking as the backend reports it. `date_time` stays a string on this
/// side: the admin page formats it for display and the backend owns the
/// canonical value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub tour_id: i64,
    pub tour_title: String,
    pub date_time: String,
    pub people_count: u32,
    pub client_name: String,
    pub client_phone: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub telegram_user_id: Option<i64>,
    #[serde(default)]
    pub telegram_username: Option<String>,
}

/// Raw booking form as the Mini App submits it: every input arrives as the
/// field's string value, untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub tour_id: String,
    pub date_time: String,
    pub people_count: String,
    pub client_name: String,
    pub client_phone: String,
    pub comment: String,
    pub telegram_user_id: Option<i64>,
    pub telegram_username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct NewBooking {
    pub tour_id: i64,
    pub date_time: String,
    pub people_count: u32,
    pub client_name: String,
    pub client_phone: String,
    pub comment: Option<String>,
    pub telegram_user_id: Option<i64>,
    pub telegram_username: Option<String>,
}

impl BookingForm {
    pub fn validate(self) -> Result<NewBooking, ClientError> {
        let client_name = self.client_name.trim().to_string();
        let client_phone = self.client_phone.trim().to_string();
        if self.date_time.trim().is_empty()
            || self.people_count.trim().is_empty()
            || client_name.is_empty()
            || client_phone.is_empty()
        {
            return Err(ClientError::Validation(
                "Заполните все обязательные поля.".to_string(),
            ));
        }

        let people_count = self
            .people_count
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|count| *count >= 1)
            .ok_or_else(|| {
                ClientError::Validation("Количество гостей должно быть числом от 1.".to_string())
            })?;

        let tour_id = self
            .tour_id
            .trim()
            .parse::<i64>()
            .map_err(|_| ClientError::Validation("Тур не выбран.".to_string()))?;

        Ok(NewBooking {
            tour_id,
            date_time: normalize_date_time(self.date_time.trim())?,
            people_count,
            client_name,
            client_phone,
            comment: none_if_empty(self.comment),
            telegram_user_id: self.telegram_user_id,
            telegram_username: self.telegram_username,
        })
    }
}

/// Create-tour form; numeric fields arrive as raw strings and become null
/// when left empty.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TourForm {
    pub title: String,
    #[serde(rename = "type")]
    pub tour_type: String,
    pub price_from: String,
    pub duration_hours: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for TourForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            tour_type: String::new(),
            price_from: String::new(),
            duration_hours: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TourPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub tour_type: String,
    pub price_from: Option<f64>,
    pub duration_hours: Option<f64>,
    pub description: Option<String>,
    pub is_active: bool,
}

impl TourForm {
    pub fn validate(self) -> Result<TourPayload, ClientError> {
        let title = self.title.trim().to_string();
        let tour_type = self.tour_type.trim().to_string();
        if title.is_empty() || tour_type.is_empty() {
            return Err(ClientError::Validation(
                "Заполните хотя бы название и тип тура.".to_string(),
            ));
        }

        Ok(TourPayload {
            price_from: parse_optional_number("Цена от", &self.price_from)?,
            duration_hours: parse_optional_number("Длительность", &self.duration_hours)?,
            description: none_if_empty(self.description),
            title,
            tour_type,
            is_active: self.is_active,
        })
    }
}

/// Partial-update form for a tour. Fields the console did not touch stay
/// absent; touched numeric fields with an empty value become explicit null.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TourPatchForm {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub tour_type: Option<String>,
    pub price_from: Option<String>,
    pub duration_hours: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Serialize)]
pub struct TourPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tour_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_from: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl TourPatchForm {
    pub fn validate(self) -> Result<TourPatch, ClientError> {
        let mut patch = TourPatch::default();

        if let Some(title) = self.title {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ClientError::Validation(
                    "Название и тип тура обязательны.".to_string(),
                ));
            }
            patch.title = Some(title);
        }
        if let Some(tour_type) = self.tour_type {
            let tour_type = tour_type.trim().to_string();
            if tour_type.is_empty() {
                return Err(ClientError::Validation(
                    "Название и тип тура обязательны.".to_string(),
                ));
            }
            patch.tour_type = Some(tour_type);
        }
        if let Some(raw) = self.price_from {
            patch.price_from = Some(parse_optional_number("Цена от", &raw)?);
        }
        if let Some(raw) = self.duration_hours {
            patch.duration_hours = Some(parse_optional_number("Длительность", &raw)?);
        }
        if let Some(description) = self.description {
            patch.description = Some(none_if_empty(description));
        }
        patch.is_active = self.is_active;

        Ok(patch)
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct SessionForm {
    pub token: String,
}

pub fn none_if_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Empty input means "no value", never zero. Anything non-empty must parse.
pub fn parse_optional_number(field: &str, raw: &str) -> Result<Option<f64>, ClientError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(Some)
        .ok_or_else(|| {
            ClientError::Validation(format!("Поле «{field}» должно быть числом."))
        })
}

/// The booking form submits the browser's `datetime-local` value. It is
/// normalized to `YYYY-MM-DDTHH:MM:SS` before leaving the gateway so the
/// backend always sees one format.
pub fn normalize_date_time(raw: &str) -> Result<String, ClientError> {
    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| ClientError::Validation("Некорректные дата и время.".to_string()))?;
    Ok(parsed.format("%Y-%m-%dT%H:%M:%S").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> BookingForm {
        BookingForm {
            tour_id: "7".to_string(),
            date_time: "2026-08-07T18:30".to_string(),
            people_count: "2".to_string(),
            client_name: "Мария".to_string(),
            client_phone: "+7 900 000-00-00".to_string(),
            comment: String::new(),
            telegram_user_id: None,
            telegram_username: None,
        }
    }

    #[test]
    fn tour_type_tolerates_unknown_values() {
        let tour: Tour = serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Конная прогулка",
            "type": "horses",
            "is_active": true
        }))
        .unwrap();
        assert_eq!(tour.tour_type, TourType::Other("horses".to_string()));
        assert_eq!(tour.tour_type.badge_label(), "TOUR");

        let back = serde_json::to_value(&tour).unwrap();
        assert_eq!(back["type"], "horses");
    }

    #[test]
    fn tour_type_known_values_round_trip() {
        for (raw, label) in [
            ("jeeping", "ADVENTURE"),
            ("yacht", "VIP"),
            ("excursion", "POPULAR"),
        ] {
            let parsed = TourType::from(raw.to_string());
            assert_eq!(parsed.as_str(), raw);
            assert_eq!(parsed.badge_label(), label);
        }
    }

    #[test]
    fn optional_number_empty_is_null_not_zero() {
        assert_eq!(parse_optional_number("Цена", "").unwrap(), None);
        assert_eq!(parse_optional_number("Цена", "   ").unwrap(), None);
        assert_eq!(parse_optional_number("Цена", "5000").unwrap(), Some(5000.0));
        assert_eq!(parse_optional_number("Цена", "1,5").unwrap(), Some(1.5));
        assert!(parse_optional_number("Цена", "дорого").is_err());
        assert!(parse_optional_number("Цена", "NaN").is_err());
    }

    #[test]
    fn date_time_is_normalized_with_seconds() {
        assert_eq!(
            normalize_date_time("2026-08-07T18:30").unwrap(),
            "2026-08-07T18:30:00"
        );
        assert_eq!(
            normalize_date_time("2026-08-07T18:30:45").unwrap(),
            "2026-08-07T18:30:45"
        );
        assert!(normalize_date_time("завтра").is_err());
    }

    #[test]
    fn booking_form_rejects_missing_required_fields() {
        for strip in ["date_time", "people_count", "client_name", "client_phone"] {
            let mut form = filled_form();
            match strip {
                "date_time" => form.date_time.clear(),
                "people_count" => form.people_count.clear(),
                "client_name" => form.client_name = "  ".to_string(),
                _ => form.client_phone.clear(),
            }
            assert!(form.validate().is_err(), "{strip} should be required");
        }
    }

    #[test]
    fn booking_form_normalizes_payload() {
        let booking = filled_form().validate().unwrap();
        assert_eq!(booking.tour_id, 7);
        assert_eq!(booking.date_time, "2026-08-07T18:30:00");
        assert_eq!(booking.people_count, 2);
        assert_eq!(booking.comment, None);
        assert_eq!(booking.telegram_user_id, None);
    }

    #[test]
    fn booking_form_rejects_zero_people() {
        let mut form = filled_form();
        form.people_count = "0".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn tour_patch_serializes_touched_empty_numbers_as_null() {
        let patch = TourPatchForm {
            title: Some("Морская прогулка".to_string()),
            tour_type: Some("yacht".to_string()),
            price_from: Some(String::new()),
            duration_hours: Some(String::new()),
            description: Some(String::new()),
            is_active: None,
        }
        .validate()
        .unwrap();

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value["price_from"], serde_json::Value::Null);
        assert_eq!(value["duration_hours"], serde_json::Value::Null);
        assert_eq!(value["description"], serde_json::Value::Null);
        assert!(value.get("is_active").is_none());
    }

    #[test]
    fn visibility_patch_touches_nothing_else() {
        let patch = TourPatchForm {
            is_active: Some(false),
            ..TourPatchForm::default()
        }
        .validate()
        .unwrap();

        let value = serde_json::to_value(&patch).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["is_active"]);
        assert_eq!(value["is_active"], false);
    }

    #[test]
    fn tour_form_requires_title_and_type() {
        let form = TourForm {
            title: "Джипинг".to_string(),
            ..TourForm::default()
        };
        assert!(form.validate().is_err());
    }
}
