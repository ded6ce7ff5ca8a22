// src/services/product_batch_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::ProductBatchRepository,
    models::product_batch::{ProductBatch, SectionProductsReport},
};

pub const ERR_EXISTS: &str = "product_batches already exists";
pub const ERR_SECTION_NOT_FOUND: &str = "section_id not found";
pub const ERR_PRODUCT_NOT_FOUND: &str = "product_id not found";

#[derive(Clone)]
pub struct ProductBatchService {
    repo: Arc<dyn ProductBatchRepository>,
}

impl ProductBatchService {
    pub fn new(repo: Arc<dyn ProductBatchRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, mut batch: ProductBatch) -> Result<ProductBatch, AppError> {
        if !self.repo.section_exists(batch.section_id).await {
            return Err(AppError::conflict(ERR_SECTION_NOT_FOUND));
        }
        if !self.repo.product_exists(batch.product_id).await {
            return Err(AppError::conflict(ERR_PRODUCT_NOT_FOUND));
        }
        if self.repo.exists(batch.batch_number).await {
            return Err(AppError::conflict(ERR_EXISTS));
        }

        batch.id = self
            .repo
            .save(&batch)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_EXISTS))?;

        Ok(batch)
    }

    pub async fn section_report(&self, section_id: i32) -> Result<SectionProductsReport, AppError> {
        self.repo
            .section_report(section_id)
            .await
            .map_err(|_| AppError::not_found(ERR_SECTION_NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::mocks::MockProductBatchRepository;

    fn sample_batch() -> ProductBatch {
        ProductBatch {
            id: 0,
            batch_number: 111,
            current_quantity: 200,
            current_temperature: 20,
            due_date: NaiveDate::from_ymd_opt(2022, 4, 4).unwrap(),
            initial_quantity: 10,
            manufacturing_date: NaiveDate::from_ymd_opt(2020, 4, 4).unwrap(),
            manufacturing_hour: 10,
            minimum_temperature: 5,
            product_id: 1,
            section_id: 1,
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_section() {
        let repo = MockProductBatchRepository::new();
        repo.set_section_exists(false);
        let service = ProductBatchService::new(Arc::new(repo));

        let err = service.save(sample_batch()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_SECTION_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_unknown_product() {
        let repo = MockProductBatchRepository::new();
        repo.set_product_exists(false);
        let service = ProductBatchService::new(Arc::new(repo));

        let err = service.save(sample_batch()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_PRODUCT_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_batch_number() {
        let service = ProductBatchService::new(Arc::new(MockProductBatchRepository::with_data(
            vec![sample_batch()],
        )));

        let err = service.save(sample_batch()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_EXISTS);
    }

    #[tokio::test]
    async fn create_assigns_id() {
        let service = ProductBatchService::new(Arc::new(MockProductBatchRepository::new()));

        let saved = service.save(sample_batch()).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.batch_number, 111);
    }

    #[tokio::test]
    async fn report_for_missing_section_is_not_found() {
        let service = ProductBatchService::new(Arc::new(MockProductBatchRepository::new()));

        let err = service.section_report(9).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), ERR_SECTION_NOT_FOUND);
    }
}
