// src/models/purchase_order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i32,
    pub order_number: String,
    pub order_date: DateTime<Utc>,
    pub tracking_code: String,
    pub buyer_id: i32,
    pub product_record_id: i32,
    pub order_status_id: i32,
}

// Linha do relatório de purchase orders por buyer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PurchaseOrdersReport {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}
