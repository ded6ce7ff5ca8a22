// src/models/product_record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// O nome de campo `products_id` segue a coluna e o contrato JSON da API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i32,
    pub last_update_date: NaiveDate,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub products_id: i32,
}
