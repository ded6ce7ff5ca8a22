// src/models/locality.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// O id da localidade vem do cliente, não do auto-incremento.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locality {
    pub id: i32,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

// Linha do relatório de sellers por localidade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct SellersByLocalityReport {
    pub locality_id: i32,
    pub locality_name: String,
    pub sellers_count: i64,
}

// Linha do relatório de carries por localidade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CarriesReport {
    pub locality_id: i32,
    pub locality_name: String,
    pub carries_count: i64,
}
