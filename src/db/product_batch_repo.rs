// src/db/product_batch_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::product_batch::{ProductBatch, SectionProductsReport};

#[async_trait]
pub trait ProductBatchRepository: Send + Sync {
    async fn exists(&self, batch_number: i32) -> bool;
    async fn section_exists(&self, section_id: i32) -> bool;
    async fn product_exists(&self, product_id: i32) -> bool;
    async fn save(&self, batch: &ProductBatch) -> Result<i32, sqlx::Error>;
    /// Soma das quantidades dos lotes de uma seção.
    async fn section_report(&self, section_id: i32) -> Result<SectionProductsReport, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlProductBatchRepository {
    pool: MySqlPool,
}

impl MySqlProductBatchRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductBatchRepository for MySqlProductBatchRepository {
    async fn exists(&self, batch_number: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>(
            "SELECT batch_number FROM product_batches WHERE batch_number = ?",
        )
        .bind(batch_number)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn section_exists(&self, section_id: i32) -> bool {
        // Sonda a tabela referenciada antes de aceitar o vínculo.
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM sections WHERE id = ?")
            .bind(section_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn product_exists(&self, product_id: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM products WHERE id = ?")
            .bind(product_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, batch: &ProductBatch) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO product_batches (batch_number, current_quantity, current_temperature, \
             due_date, initial_quantity, manufacturing_date, manufacturing_hour, \
             minimum_temperature, sections_id, products_id) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(batch.batch_number)
        .bind(batch.current_quantity)
        .bind(batch.current_temperature)
        .bind(batch.due_date)
        .bind(batch.initial_quantity)
        .bind(batch.manufacturing_date)
        .bind(batch.manufacturing_hour)
        .bind(batch.minimum_temperature)
        .bind(batch.section_id)
        .bind(batch.product_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn section_report(&self, section_id: i32) -> Result<SectionProductsReport, sqlx::Error> {
        // O SUM do MySQL devolve DECIMAL; convertemos para poder decodificar como i64.
        sqlx::query_as::<_, SectionProductsReport>(
            "SELECT pb.sections_id AS section_id, s.section_number, \
                    CAST(SUM(pb.current_quantity) AS SIGNED) AS current_quantity \
             FROM product_batches pb \
             INNER JOIN sections s ON pb.sections_id = s.id \
             WHERE s.id = ? \
             GROUP BY pb.sections_id, s.section_number",
        )
        .bind(section_id)
        .fetch_one(&self.pool)
        .await
    }
}
