// src/db/employee_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::employee::{Employee, InboundOrdersReport};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Employee>, sqlx::Error>;
    async fn get(&self, id: i32) -> Result<Employee, sqlx::Error>;
    async fn exists(&self, card_number_id: &str) -> bool;
    async fn save(&self, employee: &Employee) -> Result<i32, sqlx::Error>;
    async fn update(&self, employee: &Employee) -> Result<u64, sqlx::Error>;
    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error>;
    /// Contagem de inbound orders por funcionário; filtra por id quando fornecido.
    async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<InboundOrdersReport>, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlEmployeeRepository {
    pool: MySqlPool,
}

impl MySqlEmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for MySqlEmployeeRepository {
    async fn get_all(&self) -> Result<Vec<Employee>, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, card_number_id, first_name, last_name, warehouse_id FROM employees",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: i32) -> Result<Employee, sqlx::Error> {
        sqlx::query_as::<_, Employee>(
            "SELECT id, card_number_id, first_name, last_name, warehouse_id FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
    }

    async fn exists(&self, card_number_id: &str) -> bool {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT card_number_id FROM employees WHERE card_number_id = ?",
        )
        .bind(card_number_id)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, employee: &Employee) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO employees (card_number_id, first_name, last_name, warehouse_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&employee.card_number_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn update(&self, employee: &Employee) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE employees SET first_name = ?, last_name = ?, warehouse_id = ? WHERE id = ?",
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.warehouse_id)
        .bind(employee.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<InboundOrdersReport>, sqlx::Error> {
        match id {
            Some(id) => {
                sqlx::query_as::<_, InboundOrdersReport>(
                    "SELECT e.id, e.card_number_id, e.first_name, e.last_name, e.warehouse_id, \
                            COUNT(io.employee_id) AS inbound_orders_count \
                     FROM employees e \
                     LEFT JOIN inbound_orders io ON e.id = io.employee_id \
                     WHERE e.id = ? \
                     GROUP BY e.id",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, InboundOrdersReport>(
                    "SELECT e.id, e.card_number_id, e.first_name, e.last_name, e.warehouse_id, \
                            COUNT(io.employee_id) AS inbound_orders_count \
                     FROM employees e \
                     LEFT JOIN inbound_orders io ON e.id = io.employee_id \
                     GROUP BY e.id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }
}
