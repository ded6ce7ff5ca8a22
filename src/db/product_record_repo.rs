// src/db/product_record_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::product_record::ProductRecord;

#[async_trait]
pub trait ProductRecordRepository: Send + Sync {
    async fn product_exists(&self, product_id: i32) -> bool;
    async fn save(&self, record: &ProductRecord) -> Result<i32, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlProductRecordRepository {
    pool: MySqlPool,
}

impl MySqlProductRecordRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRecordRepository for MySqlProductRecordRepository {
    async fn product_exists(&self, product_id: i32) -> bool {
        // Sonda a tabela referenciada antes de aceitar o vínculo.
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM products WHERE id = ?")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, record: &ProductRecord) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO product_records (last_update_date, purchase_price, sale_price, products_id) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(record.last_update_date)
        .bind(record.purchase_price)
        .bind(record.sale_price)
        .bind(record.products_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }
}
