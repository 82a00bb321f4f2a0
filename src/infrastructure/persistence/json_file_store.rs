use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::domain::client::{ClientError, ClientRecord, ClientStore};

/// Keeps the full record set as one JSON array on disk.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous set intact.
pub struct JsonFileClientStore {
  path: PathBuf,
}

impl JsonFileClientStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  fn temp_path(&self) -> PathBuf {
    let mut name = self
      .path
      .file_name()
      .map(|n| n.to_os_string())
      .unwrap_or_else(|| "clients.json".into());
    name.push(".tmp");
    self.path.with_file_name(name)
  }
}

#[async_trait]
impl ClientStore for JsonFileClientStore {
  async fn load_all(&self) -> Result<Vec<ClientRecord>, ClientError> {
    let contents = match tokio::fs::read_to_string(&self.path).await {
      Ok(contents) => contents,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
      Err(e) => {
        return Err(ClientError::Storage(format!(
          "Failed to read {}: {}",
          self.path.display(),
          e
        )));
      }
    };

    if contents.trim().is_empty() {
      return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&contents)?)
  }

  async fn save_all(&self, records: &[ClientRecord]) -> Result<(), ClientError> {
    if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await.map_err(|e| {
        ClientError::Storage(format!("Failed to create {}: {}", parent.display(), e))
      })?;
    }

    let json = serde_json::to_vec_pretty(records)?;
    let temp = self.temp_path();
    tokio::fs::write(&temp, json)
      .await
      .map_err(|e| ClientError::Storage(format!("Failed to write {}: {}", temp.display(), e)))?;
    tokio::fs::rename(&temp, &self.path).await.map_err(|e| {
      ClientError::Storage(format!(
        "Failed to replace {}: {}",
        self.path.display(),
        e
      ))
    })?;

    tracing::debug!(count = records.len(), path = %self.path.display(), "Client records saved");
    Ok(())
  }
}
