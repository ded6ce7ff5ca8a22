// src/db/buyer_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::buyer::Buyer;

// Contrato do gateway de persistência. As consultas devolvem os erros crus do
// sqlx; a classificação em erro de domínio acontece na camada de serviço.
#[async_trait]
pub trait BuyerRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Buyer>, sqlx::Error>;
    async fn get(&self, id: i32) -> Result<Buyer, sqlx::Error>;
    async fn exists(&self, card_number_id: &str) -> bool;
    async fn save(&self, buyer: &Buyer) -> Result<i32, sqlx::Error>;
    async fn update(&self, buyer: &Buyer) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlBuyerRepository {
    pool: MySqlPool,
}

impl MySqlBuyerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BuyerRepository for MySqlBuyerRepository {
    async fn get_all(&self) -> Result<Vec<Buyer>, sqlx::Error> {
        sqlx::query_as::<_, Buyer>(
            "SELECT id, card_number_id, first_name, last_name FROM buyers",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: i32) -> Result<Buyer, sqlx::Error> {
        sqlx::query_as::<_, Buyer>(
            "SELECT id, card_number_id, first_name, last_name FROM buyers WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    async fn exists(&self, card_number_id: &str) -> bool {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT card_number_id FROM buyers WHERE card_number_id = ?",
        )
        .bind(card_number_id)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, buyer: &Buyer) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO buyers (card_number_id, first_name, last_name) VALUES (?, ?, ?)",
        )
        .bind(&buyer.card_number_id)
        .bind(&buyer.first_name)
        .bind(&buyer.last_name)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    // O card_number_id não entra no UPDATE: a chave natural é imutável.
    async fn update(&self, buyer: &Buyer) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE buyers SET first_name = ?, last_name = ? WHERE id = ?")
            .bind(&buyer.first_name)
            .bind(&buyer.last_name)
            .bind(buyer.id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM buyers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
