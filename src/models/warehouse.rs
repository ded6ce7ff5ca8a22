// src/models/warehouse.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Warehouse {
    pub id: i32,
    pub address: String,
    pub telephone: String,
    pub warehouse_code: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: i32,
}

// Corpo do PATCH: capacidade e temperatura aceitam zero, a presença vem do
// Option.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WarehousePatch {
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub warehouse_code: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<i32>,
}
