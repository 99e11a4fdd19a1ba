//! Product Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Product, ProductCreate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const PRODUCT_TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orderable products
    pub async fn find_in_stock(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product WHERE in_stock = true")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find a product by id, requiring it to be orderable
    ///
    /// 与按 id 直接 select 不同：下架商品 (in_stock = false) 视为不存在
    pub async fn find_in_stock_by_id(&self, id: &RecordId) -> RepoResult<Option<Product>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM product WHERE id = $id AND in_stock = true")
            .bind(("id", id.clone()))
            .await?;
        let products: Vec<Product> = result.take(0)?;
        Ok(products.into_iter().next())
    }

    /// Create a new product (seeding only, no public create endpoint)
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if data.price < 0.0 {
            return Err(RepoError::Validation("price must be >= 0".into()));
        }

        let product = Product {
            id: None,
            name: data.name,
            price: data.price,
            unit: data.unit,
            stock: data.stock.unwrap_or(100),
            image: data.image,
            category: data.category,
            in_stock: data.in_stock.unwrap_or(true),
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(PRODUCT_TABLE)
            .content(product)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Count all products (seeding idempotence check)
    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count(PRODUCT_TABLE).await
    }
}
