// src/db/warehouse_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::warehouse::Warehouse;

#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Warehouse>, sqlx::Error>;
    async fn get(&self, id: i32) -> Result<Warehouse, sqlx::Error>;
    async fn exists(&self, warehouse_code: &str) -> bool;
    async fn save(&self, warehouse: &Warehouse) -> Result<i32, sqlx::Error>;
    async fn update(&self, warehouse: &Warehouse) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlWarehouseRepository {
    pool: MySqlPool,
}

impl MySqlWarehouseRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseRepository for MySqlWarehouseRepository {
    async fn get_all(&self) -> Result<Vec<Warehouse>, sqlx::Error> {
        sqlx::query_as::<_, Warehouse>(
            "SELECT id, address, telephone, warehouse_code, minimum_capacity, minimum_temperature FROM warehouses",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: i32) -> Result<Warehouse, sqlx::Error> {
        sqlx::query_as::<_, Warehouse>(
            "SELECT id, address, telephone, warehouse_code, minimum_capacity, minimum_temperature FROM warehouses WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    async fn exists(&self, warehouse_code: &str) -> bool {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT warehouse_code FROM warehouses WHERE warehouse_code = ?",
        )
        .bind(warehouse_code)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, warehouse: &Warehouse) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO warehouses (address, telephone, warehouse_code, minimum_capacity, minimum_temperature) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(&warehouse.warehouse_code)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, warehouse: &Warehouse) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE warehouses SET address = ?, telephone = ?, warehouse_code = ?, minimum_capacity = ?, minimum_temperature = ? WHERE id = ?",
        )
        .bind(&warehouse.address)
        .bind(&warehouse.telephone)
        .bind(&warehouse.warehouse_code)
        .bind(warehouse.minimum_capacity)
        .bind(warehouse.minimum_temperature)
        .bind(warehouse.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
