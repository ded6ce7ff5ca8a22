// src/db/locality_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::locality::{CarriesReport, Locality, SellersByLocalityReport};

#[async_trait]
pub trait LocalityRepository: Send + Sync {
    async fn exists(&self, id: i32) -> bool;
    async fn save(&self, locality: &Locality) -> Result<i32, sqlx::Error>;
    /// Contagem de sellers por localidade; filtra por id quando fornecido.
    async fn sellers_report(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SellersByLocalityReport>, sqlx::Error>;
    /// Contagem de carries por localidade; filtra por id quando fornecido.
    async fn carries_report(&self, id: Option<i32>) -> Result<Vec<CarriesReport>, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlLocalityRepository {
    pool: MySqlPool,
}

impl MySqlLocalityRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocalityRepository for MySqlLocalityRepository {
    async fn exists(&self, id: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM locality WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, locality: &Locality) -> Result<i32, sqlx::Error> {
        // O id vem do cliente, então não usamos auto incremento aqui.
        sqlx::query(
            "INSERT INTO locality (id, locality_name, province_name, country_name) VALUES (?, ?, ?, ?)",
        )
        .bind(locality.id)
        .bind(&locality.locality_name)
        .bind(&locality.province_name)
        .bind(&locality.country_name)
        .execute(&self.pool)
        .await?;

        Ok(locality.id)
    }

    async fn sellers_report(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SellersByLocalityReport>, sqlx::Error> {
        match id {
            Some(id) => {
                sqlx::query_as::<_, SellersByLocalityReport>(
                    "SELECT l.id AS locality_id, l.locality_name, COUNT(s.id) AS sellers_count \
                     FROM sellers s \
                     INNER JOIN locality l ON s.locality_id = l.id \
                     WHERE l.id = ? \
                     GROUP BY l.id",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, SellersByLocalityReport>(
                    "SELECT l.id AS locality_id, l.locality_name, COUNT(s.id) AS sellers_count \
                     FROM sellers s \
                     INNER JOIN locality l ON s.locality_id = l.id \
                     GROUP BY l.id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }

    async fn carries_report(&self, id: Option<i32>) -> Result<Vec<CarriesReport>, sqlx::Error> {
        match id {
            Some(id) => {
                sqlx::query_as::<_, CarriesReport>(
                    "SELECT l.id AS locality_id, l.locality_name, COUNT(c.id) AS carries_count \
                     FROM locality l \
                     LEFT JOIN carries c ON c.locality_id = l.id \
                     WHERE l.id = ? \
                     GROUP BY l.id",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, CarriesReport>(
                    "SELECT l.id AS locality_id, l.locality_name, COUNT(c.id) AS carries_count \
                     FROM locality l \
                     LEFT JOIN carries c ON c.locality_id = l.id \
                     GROUP BY l.id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }
}
