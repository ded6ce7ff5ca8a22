// src/models/seller.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Seller {
    pub id: i32,
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}

// Corpo do PATCH: campo ausente mantém o valor armazenado.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SellerPatch {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}
