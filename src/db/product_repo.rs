// src/db/product_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::product::{Product, ProductRecordsReport};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, sqlx::Error>;
    async fn get(&self, id: i32) -> Result<Product, sqlx::Error>;
    async fn exists(&self, product_code: &str) -> bool;
    async fn save(&self, product: &Product) -> Result<i32, sqlx::Error>;
    async fn update(&self, product: &Product) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
    /// Contagem de product_records por produto; filtra por id quando fornecido.
    async fn record_counts(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, sqlx::Error>;
}

const PRODUCT_COLUMNS: &str = "id, description, expiration_rate, freezing_rate, height, length, netweight, product_code, recommended_freezing_temperature, width, product_type_id, seller_id";

#[derive(Clone)]
pub struct MySqlProductRepository {
    pool: MySqlPool,
}

impl MySqlProductRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for MySqlProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {} FROM products", PRODUCT_COLUMNS);
        sqlx::query_as::<_, Product>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn get(&self, id: i32) -> Result<Product, sqlx::Error> {
        let query = format!("SELECT {} FROM products WHERE id = ?", PRODUCT_COLUMNS);
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn exists(&self, product_code: &str) -> bool {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT product_code FROM products WHERE product_code = ?",
        )
        .bind(product_code)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, product: &Product) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO products (description, expiration_rate, freezing_rate, height, length, netweight, product_code, recommended_freezing_temperature, width, product_type_id, seller_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&product.description)
        .bind(product.expiration_rate)
        .bind(product.freezing_rate)
        .bind(product.height)
        .bind(product.length)
        .bind(product.netweight)
        .bind(&product.product_code)
        .bind(product.recommended_freezing_temperature)
        .bind(product.width)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, product: &Product) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE products SET description = ?, expiration_rate = ?, freezing_rate = ?, height = ?, length = ?, netweight = ?, product_code = ?, recommended_freezing_temperature = ?, width = ?, product_type_id = ?, seller_id = ? WHERE id = ?",
        )
        .bind(&product.description)
        .bind(product.expiration_rate)
        .bind(product.freezing_rate)
        .bind(product.height)
        .bind(product.length)
        .bind(product.netweight)
        .bind(&product.product_code)
        .bind(product.recommended_freezing_temperature)
        .bind(product.width)
        .bind(product.product_type_id)
        .bind(product.seller_id)
        .bind(product.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn record_counts(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, sqlx::Error> {
        match id {
            Some(id) => {
                sqlx::query_as::<_, ProductRecordsReport>(
                    "SELECT p.id AS product_id, p.description, COUNT(pr.id) AS records_count \
                     FROM products p \
                     LEFT JOIN product_records pr ON p.id = pr.products_id \
                     WHERE p.id = ? \
                     GROUP BY p.id",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ProductRecordsReport>(
                    "SELECT p.id AS product_id, p.description, COUNT(pr.id) AS records_count \
                     FROM products p \
                     LEFT JOIN product_records pr ON p.id = pr.products_id \
                     GROUP BY p.id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }
}
