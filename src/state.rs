use crate::api::{AdminClient, PublicClient};

#[derive(Clone)]
pub struct AppState {
    pub public: PublicClient,
    pub admin: AdminClient,
}

impl AppState {
    pub fn new(public: PublicClient, admin: AdminClient) -> Self {
        Self { public, admin }
    }
}
