pub mod admin;
pub mod public;

pub async fn health() -> &'static str {
    "ok"
}
