use std::{
    collections::BTreeMap,
    io::ErrorKind,
    marker::PhantomData,
    path::PathBuf,
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::{fs, sync::Mutex};
use tracing::{debug, warn};

use crate::errors::ServiceError;

/// Generic JSON file-backed ordered map.
///
/// The file is the only source of truth: every call reads the whole document,
/// and every mutation rewrites the whole document. A missing or unparsable
/// file reads as an empty map; any other read failure is a storage error.
///
/// All load-mutate-save cycles run under one async mutex, so callers sharing a
/// store never lose each other's writes. Other processes writing the same file
/// are not coordinated (last writer wins).
pub struct JsonDocumentStore<K, V> {
    file_path: PathBuf,
    io_lock: Mutex<()>,
    _entries: PhantomData<fn() -> (K, V)>,
}

impl<K, V> JsonDocumentStore<K, V>
where
    K: Ord + Serialize + DeserializeOwned,
    V: Serialize + DeserializeOwned,
{
    /// Bind the store to `path`, creating the parent directory if needed.
    /// The document itself is created lazily by the first mutation.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| ServiceError::Storage(format!("{}: {e}", parent.display())))?;
        }
        Ok(Arc::new(Self { file_path, io_lock: Mutex::new(()), _entries: PhantomData }))
    }

    async fn load(&self) -> Result<BTreeMap<K, V>, ServiceError> {
        let bytes = match fs::read(&self.file_path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.file_path.display(), "document missing; starting empty");
                return Ok(BTreeMap::new());
            }
            Err(e) => {
                return Err(ServiceError::Storage(format!("{}: {e}", self.file_path.display())));
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(map) => Ok(map),
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "document is not valid JSON; treating as empty");
                Ok(BTreeMap::new())
            }
        }
    }

    async fn save(&self, map: &BTreeMap<K, V>) -> Result<(), ServiceError> {
        let mut data = Vec::new();
        let mut ser = Serializer::with_formatter(&mut data, PrettyFormatter::with_indent(b"    "));
        map.serialize(&mut ser).map_err(|e| ServiceError::Storage(e.to_string()))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("{}: {e}", self.file_path.display())))?;
        Ok(())
    }

    /// Load the document and inspect it without writing.
    pub async fn read<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&BTreeMap<K, V>) -> R,
    {
        let _guard = self.io_lock.lock().await;
        let map = self.load().await?;
        Ok(f(&map))
    }

    /// Load, apply a mutation and persist. Nothing is written when `f` fails.
    pub async fn update<F, R>(&self, f: F) -> Result<R, ServiceError>
    where
        F: FnOnce(&mut BTreeMap<K, V>) -> Result<R, ServiceError>,
    {
        let _guard = self.io_lock.lock().await;
        let mut map = self.load().await?;
        let out = f(&mut map)?;
        self.save(&map).await?;
        Ok(out)
    }
}
