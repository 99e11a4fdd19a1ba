//! Slot Repository
//!
//! 容量预留走 [`SlotRepository::reserve`]：单条带条件的 UPDATE，
//! 避免读-改-写竞态导致超订。

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Slot, SlotCreate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const SLOT_TABLE: &str = "slot";

#[derive(Clone)]
pub struct SlotRepository {
    base: BaseRepository,
}

impl SlotRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all pickup slots
    pub async fn find_all(&self) -> RepoResult<Vec<Slot>> {
        let slots: Vec<Slot> = self.base.db().select(SLOT_TABLE).await?;
        Ok(slots)
    }

    /// Find slot by id
    pub async fn find_by_id(&self, id: &RecordId) -> RepoResult<Option<Slot>> {
        let slot: Option<Slot> = self.base.db().select(id.clone()).await?;
        Ok(slot)
    }

    /// Create a new slot (seeding only, no public create endpoint)
    pub async fn create(&self, data: SlotCreate) -> RepoResult<Slot> {
        if data.capacity < 1 {
            return Err(RepoError::Validation("capacity must be >= 1".into()));
        }

        let slot = Slot {
            id: None,
            label: data.label,
            capacity: data.capacity,
            booked: data.booked.unwrap_or(0),
        };

        let created: Option<Slot> = self.base.db().create(SLOT_TABLE).content(slot).await?;

        created.ok_or_else(|| RepoError::Database("Failed to create slot".to_string()))
    }

    /// Reserve one unit of capacity
    ///
    /// Guarded atomic increment: `booked += 1` only while `booked < capacity`.
    /// Returns `false` when the slot is already full (including a lost race
    /// between concurrent reservations). The caller has already rejected
    /// missing slots, so an empty update on an existing slot means "full".
    pub async fn reserve(&self, id: &RecordId) -> RepoResult<bool> {
        let mut result = self
            .base
            .db()
            .query("UPDATE $id SET booked += 1 WHERE booked < capacity RETURN AFTER")
            .bind(("id", id.clone()))
            .await?;
        let updated: Vec<Slot> = result.take(0)?;
        Ok(!updated.is_empty())
    }

    /// Release one reserved unit (compensation when the order write fails)
    pub async fn release(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $id SET booked -= 1 WHERE booked > 0")
            .bind(("id", id.clone()))
            .await?;
        Ok(())
    }

    /// Count all slots (seeding idempotence check)
    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count(SLOT_TABLE).await
    }
}
