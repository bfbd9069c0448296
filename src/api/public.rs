use reqwest::Client;
use serde_json::Value;

use crate::errors::ClientError;
use crate::models::{NewBooking, Tour};

use super::{classify, decode_list};

/// Anonymous client for the Mini App: no credential, no 401 special case.
#[derive(Clone)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

impl PublicClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn list_tours(&self) -> Result<Vec<Tour>, ClientError> {
        let url = format!("{}/api/tours", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;
        decode_list(classify(response).await?)
    }

    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Option<Value>, ClientError> {
        let url = format!("{}/api/bookings", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(booking)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;
        classify(response).await
    }
}
