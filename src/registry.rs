// 🗂️ Receipt Registry - opaque ids for submitted receipts
//
// Identity: the id assigned at submission (never changes)
// Value: the receipt (immutable once stored) plus the last score computed for it
//
// Entries are never removed and the store has no size bound.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{compute_score, ScoreBreakdown};
use crate::error::{Error, Result};
use crate::receipt::Receipt;

// ============================================================================
// REGISTRY ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub id: String,
    pub receipt: Receipt,

    /// Last score computed for this receipt, `None` until first requested
    pub cached_score: Option<u64>,

    pub submitted_at: DateTime<Utc>,
}

// ============================================================================
// RECEIPT REGISTRY
// ============================================================================

/// In-memory store of submitted receipts
///
/// Clones share the same underlying map, so one registry can be handed to
/// every request handler.
#[derive(Debug, Clone, Default)]
pub struct ReceiptRegistry {
    entries: Arc<RwLock<HashMap<String, RegistryEntry>>>,
}

impl ReceiptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a receipt under a fresh id and return the id
    pub fn submit(&self, receipt: Receipt) -> String {
        let id = Uuid::new_v4().to_string();

        let entry = RegistryEntry {
            id: id.clone(),
            receipt,
            cached_score: None,
            submitted_at: Utc::now(),
        };

        self.write().insert(id.clone(), entry);
        info!(receipt_id = %id, "receipt submitted");

        id
    }

    /// Snapshot of every stored receipt keyed by id
    pub fn get_all(&self) -> HashMap<String, Receipt> {
        self.read()
            .iter()
            .map(|(id, entry)| (id.clone(), entry.receipt.clone()))
            .collect()
    }

    /// Score the receipt stored under `id`
    ///
    /// The score is always recomputed; the cached value is only written
    /// afterwards and never read here.
    pub fn score_for(&self, id: &str) -> Result<u64> {
        let receipt = self.receipt(id)?;
        let score = compute_score(&receipt);

        self.cache_score(id, score);
        debug!(receipt_id = %id, score, "score computed");

        Ok(score)
    }

    /// Per-rule breakdown for the receipt stored under `id`
    ///
    /// Updates the cached score the same way `score_for` does.
    pub fn breakdown_for(&self, id: &str) -> Result<ScoreBreakdown> {
        let receipt = self.receipt(id)?;
        let breakdown = ScoreBreakdown::for_receipt(&receipt);

        self.cache_score(id, breakdown.total());
        debug!(receipt_id = %id, score = breakdown.total(), "breakdown computed");

        Ok(breakdown)
    }

    /// Full entry for `id`, including the last cached score
    pub fn entry(&self, id: &str) -> Option<RegistryEntry> {
        self.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn receipt(&self, id: &str) -> Result<Receipt> {
        match self.read().get(id) {
            Some(entry) => Ok(entry.receipt.clone()),
            None => {
                warn!(receipt_id = %id, "receipt not found");
                Err(Error::ReceiptNotFound(id.to_string()))
            }
        }
    }

    fn cache_score(&self, id: &str, score: u64) {
        if let Some(entry) = self.write().get_mut(id) {
            entry.cached_score = Some(score);
        }
    }

    // The map only holds plain values, so a poisoned lock still guards
    // consistent data and is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, RegistryEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, RegistryEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// TESTS
// ============================================================================
