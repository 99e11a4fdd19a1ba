//! Database Models

// Serde helpers
pub mod serde_helpers;

// Catalog
pub mod product;

// Pickup slots
pub mod slot;

// Orders
pub mod order;

// Re-exports
pub use order::{Order, OrderCreate, OrderItem, OrderItemInput, OrderReceipt, OrderStatus};
pub use product::{Product, ProductCreate};
pub use slot::{Slot, SlotCreate, SlotView};
