// src/db/purchase_order_repo.rs

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::purchase_order::{PurchaseOrder, PurchaseOrdersReport};

#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    async fn buyer_exists(&self, buyer_id: i32) -> bool;
    async fn product_record_exists(&self, product_record_id: i32) -> bool;
    async fn save(&self, order: &PurchaseOrder) -> Result<i32, sqlx::Error>;
    /// Contagem de purchase orders por comprador; filtra por id quando fornecido.
    async fn report_by_buyer(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<PurchaseOrdersReport>, sqlx::Error>;
}

#[derive(Clone)]
pub struct MySqlPurchaseOrderRepository {
    pool: MySqlPool,
}

impl MySqlPurchaseOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PurchaseOrderRepository for MySqlPurchaseOrderRepository {
    async fn buyer_exists(&self, buyer_id: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM buyers WHERE id = ?")
            .bind(buyer_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn product_record_exists(&self, product_record_id: i32) -> bool {
        let row = sqlx::query_scalar::<_, i32>("SELECT id FROM product_records WHERE id = ?")
            .bind(product_record_id)
            .fetch_optional(&self.pool)
            .await;

        matches!(row, Ok(Some(_)))
    }

    async fn save(&self, order: &PurchaseOrder) -> Result<i32, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO purchase_orders (order_number, order_date, tracking_code, buyers_id, product_records_id, order_status_id) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&order.order_number)
        .bind(order.order_date)
        .bind(&order.tracking_code)
        .bind(order.buyer_id)
        .bind(order.product_record_id)
        .bind(order.order_status_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id() as i32)
    }

    async fn report_by_buyer(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<PurchaseOrdersReport>, sqlx::Error> {
        match id {
            Some(id) => {
                sqlx::query_as::<_, PurchaseOrdersReport>(
                    "SELECT b.id, b.card_number_id, b.first_name, b.last_name, \
                            COUNT(po.id) AS purchase_orders_count \
                     FROM purchase_orders po \
                     INNER JOIN buyers b ON po.buyers_id = b.id \
                     WHERE b.id = ? \
                     GROUP BY b.id",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, PurchaseOrdersReport>(
                    "SELECT b.id, b.card_number_id, b.first_name, b.last_name, \
                            COUNT(po.id) AS purchase_orders_count \
                     FROM purchase_orders po \
                     INNER JOIN buyers b ON po.buyers_id = b.id \
                     GROUP BY b.id",
                )
                .fetch_all(&self.pool)
                .await
            }
        }
    }
}
