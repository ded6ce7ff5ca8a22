// src/db/inbound_order_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::inbound_order::InboundOrder;

#[async_trait]
pub trait InboundOrderRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<InboundOrder>, sqlx::Error>;
    async fn exists(&self, order_number: &str) -> bool;
    async fn employee_exists(&self, employee_id: i32) -> bool;
    async fn save(&self, order: &InboundOrder) -> Result<i32, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlInboundOrderRepository {
    pool: MySqlPool,
}

impl MySqlInboundOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InboundOrderRepository for MySqlInboundOrderRepository {
    async fn get_all(&self) -> Result<Vec<InboundOrder>, sqlx::Error> {
        sqlx::query_as::<_, InboundOrder>(
            "SELECT id, order_date, order_number, employee_id, product_batch_id, warehouse_id \
             FROM inbound_orders",
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn exists(&self, order_number: &str) -> bool {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT order_number FROM inbound_orders WHERE order_number = ?",
        )
        .bind(order_number)
        .fetch_optional(&self.pool)
        .await;

        matches!(row, Ok(Some(_)))
    }

    async fn employee_exists(&self, employee_id: i32) -> bool {
        // Sonda a tabela referenciada antes de aceitar o vínculo.
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM employees WHERE id = ?")
            .bind(employee_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, order: &InboundOrder) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO inbound_orders (order_date, order_number, employee_id, product_batch_id, warehouse_id) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(order.order_date)
        .bind(&order.order_number)
        .bind(order.employee_id)
        .bind(order.product_batch_id)
        .bind(order.warehouse_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }
}
