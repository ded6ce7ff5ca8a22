// src/models/section.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Section {
    pub id: i32,
    pub section_number: i32,
    pub current_temperature: i32,
    pub minimum_temperature: i32,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i32,
    pub product_type_id: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionPatch {
    pub section_number: Option<i32>,
    pub current_temperature: Option<i32>,
    pub minimum_temperature: Option<i32>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i32>,
    pub product_type_id: Option<i32>,
}
