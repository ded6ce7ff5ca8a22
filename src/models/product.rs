// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub description: String,
    pub expiration_rate: i32,
    pub freezing_rate: i32,
    pub height: f32,
    pub length: f32,
    pub netweight: f32,
    pub product_code: String,
    pub recommended_freezing_temperature: f32,
    pub width: f32,
    pub product_type_id: i32,
    pub seller_id: i32,
}

// Corpo do PATCH: os numéricos aceitam zero, por isso a presença vem do
// Option e não do valor.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub description: Option<String>,
    pub expiration_rate: Option<i32>,
    pub freezing_rate: Option<i32>,
    pub height: Option<f32>,
    pub length: Option<f32>,
    pub netweight: Option<f32>,
    pub product_code: Option<String>,
    pub recommended_freezing_temperature: Option<f32>,
    pub width: Option<f32>,
    pub product_type_id: Option<i32>,
    pub seller_id: Option<i32>,
}

// Linha do relatório de registros por produto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ProductRecordsReport {
    pub product_id: i32,
    pub description: String,
    pub records_count: i64,
}
