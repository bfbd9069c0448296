use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tracing::{debug, error};

use crate::errors::ClientError;
use crate::models::{Booking, BookingStatus, Tour, TourPatch, TourPayload};
use crate::session::Session;

use super::{classify, decode_list, Attachment, RequestBody};

const TOKEN_HEADER: &str = "X-Admin-Token";

/// Credentialed client for the admin console. Every call carries the shared
/// secret; a 401 from the backend invalidates the stored credential so the
/// console asks for a fresh one instead of retrying a stale value.
#[derive(Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
    session: Session,
}

impl AdminClient {
    pub fn new(client: Client, base_url: String, session: Session) -> Self {
        Self {
            client,
            base_url,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<Option<Value>, ClientError> {
        let token = self
            .session
            .get()
            .await
            .ok_or_else(ClientError::token_missing)?;

        let url = format!("{}{}", self.base_url, path);
        debug!("{method} {url}");
        let mut request = self.client.request(method, &url).header(TOKEN_HEADER, token);
        request = match body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Multipart(form)) => request.multipart(form),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.session.clear().await {
                error!("failed to drop rejected token: {err}");
            }
            return Err(ClientError::token_rejected());
        }
        classify(response).await
    }

    pub async fn list_tours(&self) -> Result<Vec<Tour>, ClientError> {
        decode_list(self.request(Method::GET, "/admin/tours", None).await?)
    }

    pub async fn create_tour(
        &self,
        payload: &TourPayload,
        attachment: Option<Attachment>,
    ) -> Result<Option<Value>, ClientError> {
        let body = RequestBody::for_tour(payload, attachment)?;
        self.request(Method::POST, "/admin/tours", Some(body)).await
    }

    pub async fn update_tour(&self, id: i64, patch: &TourPatch) -> Result<Option<Value>, ClientError> {
        let body = RequestBody::json(patch)?;
        self.request(Method::PATCH, &format!("/admin/tours/{id}"), Some(body))
            .await
    }

    pub async fn list_bookings(
        &self,
        filter: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, ClientError> {
        let path = match filter {
            Some(status) => format!("/admin/bookings?status={}", status.as_str()),
            None => "/admin/bookings".to_string(),
        };
        decode_list(self.request(Method::GET, &path, None).await?)
    }

    pub async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<Option<Value>, ClientError> {
        let body = RequestBody::Json(serde_json::json!({ "status": status }));
        self.request(Method::PATCH, &format!("/admin/bookings/{id}"), Some(body))
            .await
    }
}
