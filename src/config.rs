use std::env;
use std::path::PathBuf;

const DEFAULT_BACKEND_URL: &str = "https://adler-backend.onrender.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub backend_url: String,
    pub token_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8080);

        let backend_url = env::var("BACKEND_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let token_path = env::var("ADMIN_TOKEN_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/admin_token"));

        Self {
            port,
            backend_url: normalize_base_url(&backend_url),
            token_path,
        }
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://127.0.0.1:9000//"),
            "http://127.0.0.1:9000"
        );
        assert_eq!(
            normalize_base_url(" https://adler-backend.onrender.com "),
            "https://adler-backend.onrender.com"
        );
    }
}
