// src/db/carry_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::carry::Carry;

#[async_trait]
pub trait CarryRepository: Send + Sync {
    async fn exists(&self, cid: &str) -> bool;
    async fn locality_exists(&self, locality_id: i32) -> bool;
    async fn save(&self, carry: &Carry) -> Result<i32, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlCarryRepository {
    pool: MySqlPool,
}

impl MySqlCarryRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarryRepository for MySqlCarryRepository {
    async fn exists(&self, cid: &str) -> bool {
        let row = sqlx::query_scalar::<_, String>("SELECT cid FROM carries WHERE cid = ?")
            .bind(cid)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn locality_exists(&self, locality_id: i32) -> bool {
        // Sonda a tabela referenciada antes de aceitar o vínculo.
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM locality WHERE id = ?")
            .bind(locality_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, carry: &Carry) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO carries (cid, company_name, address, telephone, locality_id) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&carry.cid)
        .bind(&carry.company_name)
        .bind(&carry.address)
        .bind(&carry.telephone)
        .bind(carry.locality_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }
}
