// src/models/carry.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carry {
    pub id: i32,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i32,
}
