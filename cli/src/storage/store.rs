use crate::client::models::{ApiDefinition, Collection};
use crate::core::error::ApiError;
use crate::core::paths::clean_path;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

pub const SAVED_FILE_NAME: &str = "db.json";
pub const RECENT_FILE_NAME: &str = "recent.json";

/// The recent list keeps this many entries.
pub const RECENT_LIMIT: usize = 10;

const ID_LENGTH: usize = 4;

/// How a write to the recent list is meant.
#[derive(Debug, Clone)]
pub enum RecentUpdate {
    /// Replace the file with an empty collection.
    Clear,
    /// Prepend one entry to whatever is on disk and keep the newest ten.
    Push(ApiDefinition),
}

/// Flat-file storage for the saved and recent collections.
///
/// There is no locking; concurrent invocations race and the last writer wins.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
    saved_path: PathBuf,
    recent_path: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            saved_path: dir.join(SAVED_FILE_NAME),
            recent_path: dir.join(RECENT_FILE_NAME),
            dir,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the directory, and both files if either one is missing.
    pub async fn initialize(&self) -> Result<(), ApiError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            ApiError::Storage(format!(
                "Failed to create data directory {}: {e}",
                clean_path(&self.dir)
            ))
        })?;

        let saved_exists = fs::try_exists(&self.saved_path).await.unwrap_or(false);
        let recent_exists = fs::try_exists(&self.recent_path).await.unwrap_or(false);

        if !(saved_exists && recent_exists) {
            tracing::debug!("initializing storage in {}", clean_path(&self.dir));
            let empty = Collection::new();
            write_collection(&self.saved_path, &empty)
                .await
                .map_err(|e| ApiError::Storage(format!("Failed to save DB file: {e}")))?;
            write_collection(&self.recent_path, &empty)
                .await
                .map_err(|e| ApiError::Storage(format!("Failed to save recent APIs: {e}")))?;
        }

        Ok(())
    }

    pub async fn load_saved(&self) -> Result<Collection, ApiError> {
        read_collection(&self.saved_path)
            .await
            .map_err(|e| ApiError::Storage(format!("Failed to read DB file: {e}")))
    }

    /// Recent history is disposable: any read or parse failure yields an
    /// empty collection.
    pub async fn load_recent(&self) -> Collection {
        match read_collection(&self.recent_path).await {
            Ok(collection) => collection,
            Err(e) => {
                tracing::debug!("treating recent list as empty: {e}");
                Collection::new()
            }
        }
    }

    pub async fn save_saved(&self, collection: &Collection) -> Result<(), ApiError> {
        write_collection(&self.saved_path, collection)
            .await
            .map_err(|e| ApiError::Storage(format!("Failed to save DB file: {e}")))
    }

    pub async fn save_recent(&self, update: RecentUpdate) -> Result<(), ApiError> {
        let collection = match update {
            RecentUpdate::Clear => Collection::new(),
            RecentUpdate::Push(api) => {
                let mut apis = self.load_recent().await.apis;
                apis.insert(0, api);
                apis.truncate(RECENT_LIMIT);
                Collection {
                    apis,
                    ..Collection::new()
                }
            }
        };

        write_collection(&self.recent_path, &collection)
            .await
            .map_err(|e| ApiError::Storage(format!("Failed to save recent APIs: {e}")))
    }

    /// Short random hex id. Not checked against existing entries, so two
    /// definitions can end up sharing one.
    pub fn generate_id() -> String {
        let mut id = Uuid::new_v4().simple().to_string();
        id.truncate(ID_LENGTH);
        id
    }
}

async fn read_collection(path: &Path) -> Result<Collection, ApiError> {
    let content = fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

async fn write_collection(path: &Path, collection: &Collection) -> Result<(), ApiError> {
    let content = serde_json::to_string_pretty(collection)?;
    fs::write(path, content).await?;
    Ok(())
}
