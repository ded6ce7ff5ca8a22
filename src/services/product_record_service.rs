// src/services/product_record_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError, db::ProductRecordRepository, models::product_record::ProductRecord,
};

pub const ERR_PRODUCT_NOT_FOUND: &str = "error: product id doesn't exists";

#[derive(Clone)]
pub struct ProductRecordService {
    repo: Arc<dyn ProductRecordRepository>,
}

impl ProductRecordService {
    pub fn new(repo: Arc<dyn ProductRecordRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, mut record: ProductRecord) -> Result<ProductRecord, AppError> {
        if !self.repo.product_exists(record.products_id).await {
            return Err(AppError::conflict(ERR_PRODUCT_NOT_FOUND));
        }

        record.id = self.repo.save(&record).await?;

        Ok(record)
    }
}
