// src/db/seller_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::seller::Seller;

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Seller>, sqlx::Error>;
    async fn get(&self, id: i32) -> Result<Seller, sqlx::Error>;
    async fn exists(&self, cid: i32) -> bool;
    async fn locality_exists(&self, locality_id: i32) -> bool;
    async fn save(&self, seller: &Seller) -> Result<i32, sqlx::Error>;
    async fn update(&self, seller: &Seller) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlSellerRepository {
    pool: MySqlPool,
}

impl MySqlSellerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SellerRepository for MySqlSellerRepository {
    async fn get_all(&self) -> Result<Vec<Seller>, sqlx::Error> {
        sqlx::query_as::<_, Seller>(
            "SELECT id, cid, company_name, address, telephone, locality_id FROM sellers",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: i32) -> Result<Seller, sqlx::Error> {
        sqlx::query_as::<_, Seller>(
            "SELECT id, cid, company_name, address, telephone, locality_id FROM sellers WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    async fn exists(&self, cid: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>("SELECT cid FROM sellers WHERE cid = ?")
            .bind(cid)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    // Sonda a tabela referenciada antes de aceitar o vínculo.
    async fn locality_exists(&self, locality_id: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM locality WHERE id = ?")
            .bind(locality_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, seller: &Seller) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sellers (cid, company_name, address, telephone, locality_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(seller.locality_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, seller: &Seller) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sellers SET cid = ?, company_name = ?, address = ?, telephone = ?, locality_id = ? WHERE id = ?",
        )
        .bind(seller.cid)
        .bind(&seller.company_name)
        .bind(&seller.address)
        .bind(&seller.telephone)
        .bind(seller.locality_id)
        .bind(seller.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sellers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
