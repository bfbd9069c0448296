use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::error;

/// Where the single admin credential lives between runs. The console keeps
/// exactly one opaque value; everything else is backend state.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn load(&self) -> Option<String>;
    async fn save(&self, token: &str) -> io::Result<()>;
    async fn clear(&self) -> io::Result<()>;
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CredentialStore for FileStore {
    async fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() { None } else { Some(token) }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                error!("failed to read token file: {err}");
                None
            }
        }
    }

    async fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, token).await
    }

    async fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path).await {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct MemoryStore {
    token: RwLock<Option<String>>,
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn load(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn save(&self, token: &str) -> io::Result<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> io::Result<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

/// Session context handed to the credentialed client: the current token
/// plus its backing store. `set` and `clear` write through.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
    current: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub async fn open(store: Arc<dyn CredentialStore>) -> Self {
        let current = store.load().await;
        Self {
            store,
            current: Arc::new(RwLock::new(current)),
        }
    }

    pub async fn get(&self) -> Option<String> {
        self.current.read().await.clone()
    }

    pub async fn set(&self, token: &str) -> io::Result<()> {
        self.store.save(token).await?;
        *self.current.write().await = Some(token.to_string());
        Ok(())
    }

    pub async fn clear(&self) -> io::Result<()> {
        self.store.clear().await?;
        *self.current.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_token_path() -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("adler_token_{}_{}", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn session_set_get_clear() {
        let session = Session::open(Arc::new(MemoryStore::default())).await;
        assert_eq!(session.get().await, None);

        session.set("sekret").await.unwrap();
        assert_eq!(session.get().await.as_deref(), Some("sekret"));

        session.clear().await.unwrap();
        assert_eq!(session.get().await, None);
    }

    #[tokio::test]
    async fn session_survives_reopen_with_file_store() {
        let path = unique_token_path();

        let session = Session::open(Arc::new(FileStore::new(path.clone()))).await;
        session.set("sekret").await.unwrap();

        let reopened = Session::open(Arc::new(FileStore::new(path.clone()))).await;
        assert_eq!(reopened.get().await.as_deref(), Some("sekret"));

        reopened.clear().await.unwrap();
        let empty = Session::open(Arc::new(FileStore::new(path))).await;
        assert_eq!(empty.get().await, None);
    }

    #[tokio::test]
    async fn file_store_tolerates_missing_file() {
        let store = FileStore::new(unique_token_path());
        assert_eq!(store.load().await, None);
        store.clear().await.unwrap();
    }
}
