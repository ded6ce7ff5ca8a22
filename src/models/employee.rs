// src/models/employee.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
}

// Linha do relatório de inbound orders por funcionário.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct InboundOrdersReport {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
    pub inbound_orders_count: i64,
}
