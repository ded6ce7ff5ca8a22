// src/models/product_batch.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductBatch {
    pub id: i32,
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: i32,
    pub due_date: NaiveDate,
    pub initial_quantity: i32,
    pub manufacturing_date: NaiveDate,
    pub manufacturing_hour: i32,
    pub minimum_temperature: i32,
    pub product_id: i32,
    pub section_id: i32,
}

// Linha do relatório de quantidade por seção.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SectionProductsReport {
    pub section_id: i32,
    pub section_number: i32,
    pub current_quantity: i64,
}
