use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::entities::{ClientData, ClientPatch, ClientRecord};
use super::errors::ClientError;
use super::ports::{ClientStore, TaxAuthorityLookup};
use crate::domain::tax_id::{self, PersonKind, TaxRegime};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Listing filters. Present filters are ANDed together.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClientFilters {
  pub search: Option<String>,
  pub person_kind: Option<PersonKind>,
  pub tax_regime: Option<TaxRegime>,
  pub active: Option<bool>,
}

impl ClientFilters {
  pub fn matches(&self, record: &ClientRecord) -> bool {
    if let Some(person_kind) = self.person_kind {
      if record.person_kind != person_kind {
        return false;
      }
    }
    if let Some(tax_regime) = self.tax_regime {
      if record.tax_regime != tax_regime {
        return false;
      }
    }
    if let Some(active) = self.active {
      if record.active != active {
        return false;
      }
    }

    match self.search.as_deref() {
      Some(term) if !term.is_empty() => {
        let term = term.to_lowercase();
        [
          Some(record.given_name.as_str()),
          record.family_name.as_deref(),
          record.legal_name.as_deref(),
          Some(record.tax_id.as_str()),
          record.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
      }
      _ => true,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientPage {
  pub records: Vec<ClientRecord>,
  pub total: usize,
  pub page: usize,
  pub page_size: usize,
  pub total_pages: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersonKindCounts {
  pub individual: usize,
  pub organization: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientStats {
  pub total: usize,
  pub active: usize,
  pub inactive: usize,
  pub by_person_kind: PersonKindCounts,
  pub by_tax_regime: BTreeMap<String, usize>,
}

/// Client record directory over an injected store.
///
/// Mutations run one at a time behind `write_lock`, so the duplicate check
/// and the full-set write cannot interleave inside one process. Separate
/// processes sharing a store can still race.
pub struct ClientDirectory {
  store: Arc<dyn ClientStore>,
  lookup: Arc<dyn TaxAuthorityLookup>,
  write_lock: Mutex<()>,
}

impl ClientDirectory {
  pub fn new(store: Arc<dyn ClientStore>, lookup: Arc<dyn TaxAuthorityLookup>) -> Self {
    Self {
      store,
      lookup,
      write_lock: Mutex::new(()),
    }
  }

  pub async fn list(
    &self,
    filters: &ClientFilters,
    page: usize,
    page_size: usize,
  ) -> Result<ClientPage, ClientError> {
    let page = page.max(1);
    let page_size = page_size.max(1);

    let mut matching: Vec<ClientRecord> = self
      .store
      .load_all()
      .await?
      .into_iter()
      .filter(|record| filters.matches(record))
      .collect();
    matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let total = matching.len();
    let total_pages = total.div_ceil(page_size);
    let records = matching
      .into_iter()
      .skip((page - 1).saturating_mul(page_size))
      .take(page_size)
      .collect();

    tracing::debug!(total, page, page_size, "Listed clients");

    Ok(ClientPage {
      records,
      total,
      page,
      page_size,
      total_pages,
    })
  }

  pub async fn get_by_id(&self, id: Uuid) -> Result<Option<ClientRecord>, ClientError> {
    let records = self.store.load_all().await?;
    Ok(records.into_iter().find(|record| record.id == id))
  }

  pub async fn get_by_tax_id(&self, tax_id: &str) -> Result<Option<ClientRecord>, ClientError> {
    let records = self.store.load_all().await?;
    Ok(records.into_iter().find(|record| record.has_tax_id(tax_id)))
  }

  pub async fn create(&self, data: ClientData) -> Result<ClientRecord, ClientError> {
    let _guard = self.write_lock.lock().await;
    let mut records = self.store.load_all().await?;

    let normalized = tax_id::clean(&data.tax_id);
    if records.iter().any(|record| record.tax_id == normalized) {
      return Err(ClientError::DuplicateTaxId(normalized));
    }

    let record = ClientRecord::new(data);
    records.push(record.clone());
    self.store.save_all(&records).await?;

    tracing::info!(client_id = %record.id, tax_id = %record.tax_id, "Client created");
    Ok(record)
  }

  pub async fn update(&self, id: Uuid, patch: ClientPatch) -> Result<ClientRecord, ClientError> {
    let _guard = self.write_lock.lock().await;
    let mut records = self.store.load_all().await?;

    let index = records
      .iter()
      .position(|record| record.id == id)
      .ok_or(ClientError::NotFound(id))?;

    if let Some(candidate) = patch.tax_id.as_deref() {
      let normalized = tax_id::clean(candidate);
      if records
        .iter()
        .any(|record| record.id != id && record.tax_id == normalized)
      {
        return Err(ClientError::DuplicateTaxId(normalized));
      }
    }

    records[index].apply(patch);
    let updated = records[index].clone();
    self.store.save_all(&records).await?;

    tracing::info!(client_id = %id, "Client updated");
    Ok(updated)
  }

  /// Logical delete. Deleting an inactive record only refreshes its
  /// modification time.
  pub async fn soft_delete(&self, id: Uuid) -> Result<(), ClientError> {
    self.set_active(id, false).await?;
    tracing::info!(client_id = %id, "Client deactivated");
    Ok(())
  }

  pub async fn reactivate(&self, id: Uuid) -> Result<ClientRecord, ClientError> {
    let record = self.set_active(id, true).await?;
    tracing::info!(client_id = %id, "Client reactivated");
    Ok(record)
  }

  pub async fn stats(&self) -> Result<ClientStats, ClientError> {
    let records = self.store.load_all().await?;

    let mut stats = ClientStats {
      total: records.len(),
      ..Default::default()
    };
    for record in &records {
      if record.active {
        stats.active += 1;
      } else {
        stats.inactive += 1;
      }
      match record.person_kind {
        PersonKind::Individual => stats.by_person_kind.individual += 1,
        PersonKind::Organization => stats.by_person_kind.organization += 1,
      }
      *stats
        .by_tax_regime
        .entry(record.tax_regime.label().to_string())
        .or_default() += 1;
    }

    Ok(stats)
  }

  /// Creates a client from tax authority data. A lookup miss yields
  /// `Ok(None)`; an already known tax ID yields the stored record unchanged.
  pub async fn import_from_lookup(
    &self,
    tax_id: &str,
  ) -> Result<Option<ClientRecord>, ClientError> {
    let normalized = tax_id::clean(tax_id);

    let Some(found) = self.lookup.lookup(&normalized).await? else {
      tracing::info!(tax_id = %normalized, "Tax authority has no record");
      return Ok(None);
    };

    if let Some(existing) = self.get_by_tax_id(&normalized).await? {
      if !existing.active {
        tracing::warn!(client_id = %existing.id, "Import matched an inactive client");
      }
      return Ok(Some(existing));
    }

    match self.create(found.into_client_data()).await {
      Ok(record) => Ok(Some(record)),
      Err(ClientError::DuplicateTaxId(_)) => self.get_by_tax_id(&normalized).await,
      Err(err) => Err(err),
    }
  }

  async fn set_active(&self, id: Uuid, active: bool) -> Result<ClientRecord, ClientError> {
    let _guard = self.write_lock.lock().await;
    let mut records = self.store.load_all().await?;

    let record = records
      .iter_mut()
      .find(|record| record.id == id)
      .ok_or(ClientError::NotFound(id))?;
    if active {
      record.reactivate();
    } else {
      record.deactivate();
    }
    let updated = record.clone();

    self.store.save_all(&records).await?;
    Ok(updated)
  }
}
