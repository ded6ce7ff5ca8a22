// src/db/section_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::section::Section;

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Section>, sqlx::Error>;
    async fn get(&self, id: i32) -> Result<Section, sqlx::Error>;
    async fn exists(&self, section_number: i32) -> bool;
    async fn save(&self, section: &Section) -> Result<i32, sqlx::Error>;
    async fn update(&self, section: &Section) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
}

const SECTION_COLUMNS: &str = "id, section_number, current_temperature, minimum_temperature, current_capacity, minimum_capacity, maximum_capacity, warehouse_id, product_type_id";

#[derive(Clone)]
pub struct MySqlSectionRepository {
    pool: MySqlPool,
}

impl MySqlSectionRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SectionRepository for MySqlSectionRepository {
    async fn get_all(&self) -> Result<Vec<Section>, sqlx::Error> {
        let query = format!("SELECT {} FROM sections", SECTION_COLUMNS);
        sqlx::query_as::<_, Section>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn get(&self, id: i32) -> Result<Section, sqlx::Error> {
        let query = format!("SELECT {} FROM sections WHERE id = ?", SECTION_COLUMNS);
        sqlx::query_as::<_, Section>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn exists(&self, section_number: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>(
            "SELECT section_number FROM sections WHERE section_number = ?",
        )
        .bind(section_number)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, section: &Section) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO sections (section_number, current_temperature, minimum_temperature, current_capacity, minimum_capacity, maximum_capacity, warehouse_id, product_type_id) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, section: &Section) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sections SET section_number = ?, current_temperature = ?, minimum_temperature = ?, current_capacity = ?, minimum_capacity = ?, maximum_capacity = ?, warehouse_id = ?, product_type_id = ? WHERE id = ?",
        )
        .bind(section.section_number)
        .bind(section.current_temperature)
        .bind(section.minimum_temperature)
        .bind(section.current_capacity)
        .bind(section.minimum_capacity)
        .bind(section.maximum_capacity)
        .bind(section.warehouse_id)
        .bind(section.product_type_id)
        .bind(section.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sections WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
