//! Demo data seeding
//!
//! 幂等引导：product / slot 表非空时跳过对应的插入。
//! 只在部署后手动触发一次 (POST /seed)，不属于请求服务契约。

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{ProductCreate, SlotCreate};
use crate::db::repository::{ProductRepository, RepoResult, SlotRepository};

/// Fixed demo catalog
fn demo_products() -> Vec<ProductCreate> {
    vec![
        ProductCreate {
            name: "Bananas".into(),
            price: 0.79,
            unit: "each".into(),
            stock: Some(200),
            category: Some("Produce".into()),
            in_stock: Some(true),
            image: Some(
                "https://images.unsplash.com/photo-1571772996211-2f02c9727629?w=400&q=80".into(),
            ),
        },
        ProductCreate {
            name: "Milk".into(),
            price: 2.49,
            unit: "1L".into(),
            stock: Some(120),
            category: Some("Dairy".into()),
            in_stock: Some(true),
            image: Some(
                "https://images.unsplash.com/photo-1580910051074-3eb694886505?w=400&q=80".into(),
            ),
        },
        ProductCreate {
            name: "Bread".into(),
            price: 1.99,
            unit: "loaf".into(),
            stock: Some(80),
            category: Some("Bakery".into()),
            in_stock: Some(true),
            image: Some(
                "https://images.unsplash.com/photo-1542838132-92c53300491e?w=400&q=80".into(),
            ),
        },
        ProductCreate {
            name: "Eggs".into(),
            price: 3.49,
            unit: "12".into(),
            stock: Some(90),
            category: Some("Dairy".into()),
            in_stock: Some(true),
            image: Some(
                "https://images.unsplash.com/photo-1517959105821-eaf2591984dd?w=400&q=80".into(),
            ),
        },
    ]
}

/// Fixed pickup slots for today and tomorrow
fn demo_slots() -> Vec<SlotCreate> {
    vec![
        SlotCreate {
            label: "Today 10:00–10:30".into(),
            capacity: 10,
            booked: Some(0),
        },
        SlotCreate {
            label: "Today 10:30–11:00".into(),
            capacity: 10,
            booked: Some(0),
        },
        SlotCreate {
            label: "Today 5:00–5:30".into(),
            capacity: 12,
            booked: Some(0),
        },
        SlotCreate {
            label: "Tomorrow 10:00–10:30".into(),
            capacity: 10,
            booked: Some(0),
        },
        SlotCreate {
            label: "Tomorrow 5:00–5:30".into(),
            capacity: 12,
            booked: Some(0),
        },
    ]
}

/// Seed demo products and slots, skipping any non-empty collection
pub async fn seed(db: &Surreal<Db>) -> RepoResult<()> {
    let products = ProductRepository::new(db.clone());
    if products.count().await? == 0 {
        for product in demo_products() {
            products.create(product).await?;
        }
        tracing::info!("Seeded demo products");
    }

    let slots = SlotRepository::new(db.clone());
    if slots.count().await? == 0 {
        for slot in demo_slots() {
            slots.create(slot).await?;
        }
        tracing::info!("Seeded demo pickup slots");
    }

    Ok(())
}
