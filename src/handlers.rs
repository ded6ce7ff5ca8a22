// src/handlers.rs

pub mod buyer;
pub mod carry;
pub mod employee;
pub mod inbound_order;
pub mod locality;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;
