//! Slot Model
//!
//! 取货时段：capacity 为上限，booked 只通过下单流程单调递增。
//! 不变量：每次成功下单后 booked <= capacity。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Pickup time slot with limited capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<RecordId>,
    /// Human readable label e.g. "Today 10:00–10:30"
    pub label: String,
    /// Max number of orders allowed in this slot (>= 1)
    pub capacity: i32,
    /// Number of orders already booked
    #[serde(default)]
    pub booked: i32,
}

impl Slot {
    /// Remaining capacity, clamped at zero
    pub fn available(&self) -> i32 {
        (self.capacity - self.booked).max(0)
    }
}

/// Create payload (used by seeding)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotCreate {
    pub label: String,
    pub capacity: i32,
    pub booked: Option<i32>,
}

/// API view with derived availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotView {
    pub id: String,
    pub label: String,
    pub capacity: i32,
    pub booked: i32,
    pub available: i32,
}

impl From<Slot> for SlotView {
    fn from(slot: Slot) -> Self {
        let available = slot.available();
        Self {
            id: slot.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            label: slot.label,
            capacity: slot.capacity,
            booked: slot.booked,
            available,
        }
    }
}
