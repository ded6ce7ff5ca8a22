// src/services/product_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::ProductRepository,
    models::product::{Product, ProductPatch, ProductRecordsReport},
};

pub const ERR_NOT_FOUND: &str = "product not found";
pub const ERR_CODE_EXISTS: &str = "product_code already exists";
pub const ERR_REPORT_ID: &str = "id does not exist";

#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Product, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))
    }

    pub async fn save(&self, mut product: Product) -> Result<Product, AppError> {
        if self.repo.exists(&product.product_code).await {
            return Err(AppError::conflict(ERR_CODE_EXISTS));
        }

        product.id = self
            .repo
            .save(&product)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_CODE_EXISTS))?;

        Ok(product)
    }

    /// Strings vazias não sobrescrevem; números presentes sobrescrevem mesmo com zero.
    pub async fn update(&self, id: i32, patch: ProductPatch) -> Result<Product, AppError> {
        let mut product = self
            .repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        if let Some(description) = patch.description {
            if !description.is_empty() {
                product.description = description;
            }
        }
        if let Some(product_code) = patch.product_code {
            if !product_code.is_empty() {
                product.product_code = product_code;
            }
        }
        if let Some(expiration_rate) = patch.expiration_rate {
            product.expiration_rate = expiration_rate;
        }
        if let Some(freezing_rate) = patch.freezing_rate {
            product.freezing_rate = freezing_rate;
        }
        if let Some(height) = patch.height {
            product.height = height;
        }
        if let Some(length) = patch.length {
            product.length = length;
        }
        if let Some(netweight) = patch.netweight {
            product.netweight = netweight;
        }
        if let Some(temperature) = patch.recommended_freezing_temperature {
            product.recommended_freezing_temperature = temperature;
        }
        if let Some(width) = patch.width {
            product.width = width;
        }
        if let Some(product_type_id) = patch.product_type_id {
            product.product_type_id = product_type_id;
        }
        if let Some(seller_id) = patch.seller_id {
            product.seller_id = seller_id;
        }

        self.repo.update(&product).await?;

        Ok(product)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        let affected = self.repo.delete(id).await?;
        if affected < 1 {
            return Err(AppError::not_found(ERR_NOT_FOUND));
        }

        Ok(())
    }

    pub async fn record_counts(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<ProductRecordsReport>, AppError> {
        if let Some(id) = id {
            self.repo
                .get(id)
                .await
                .map_err(|_| AppError::not_found(ERR_REPORT_ID))?;
        }

        Ok(self.repo.record_counts(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockProductRepository;

    fn sample_product() -> Product {
        Product {
            id: 0,
            description: "yogurt".to_string(),
            expiration_rate: 10,
            freezing_rate: 2,
            height: 6.4,
            length: 4.5,
            netweight: 3.4,
            product_code: "PROD01".to_string(),
            recommended_freezing_temperature: 1.3,
            width: 1.2,
            product_type_id: 2,
            seller_id: 2,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let service = ProductService::new(Arc::new(MockProductRepository::with_data(vec![])));

        let saved = service.save(sample_product()).await.unwrap();
        let fetched = service.get(saved.id).await.unwrap();

        assert_eq!(saved, fetched);
        assert_eq!(fetched.product_code, "PROD01");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_product_code() {
        let mut existing = sample_product();
        existing.id = 1;
        let service =
            ProductService::new(Arc::new(MockProductRepository::with_data(vec![existing])));

        let err = service.save(sample_product()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_CODE_EXISTS);
    }

    #[tokio::test]
    async fn update_accepts_zero_for_numeric_fields() {
        let mut existing = sample_product();
        existing.id = 1;
        let service =
            ProductService::new(Arc::new(MockProductRepository::with_data(vec![existing])));

        let patch = ProductPatch {
            expiration_rate: Some(0),
            description: Some(String::new()),
            ..ProductPatch::default()
        };
        let updated = service.update(1, patch).await.unwrap();

        // Zero numérico vale como valor novo; string vazia não.
        assert_eq!(updated.expiration_rate, 0);
        assert_eq!(updated.description, "yogurt");
    }

    #[tokio::test]
    async fn report_with_unknown_id_is_not_found() {
        let service = ProductService::new(Arc::new(MockProductRepository::with_data(vec![])));

        let err = service.record_counts(Some(7)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), ERR_REPORT_ID);
    }

    #[tokio::test]
    async fn report_without_filter_lists_every_product() {
        let mut first = sample_product();
        first.id = 1;
        let mut second = sample_product();
        second.id = 2;
        second.product_code = "PROD02".to_string();
        let service = ProductService::new(Arc::new(MockProductRepository::with_data(vec![
            first, second,
        ])));

        let rows = service.record_counts(None).await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].records_count, 0);
    }
}
