// src/services/purchase_order_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::PurchaseOrderRepository,
    models::purchase_order::{PurchaseOrder, PurchaseOrdersReport},
};

pub const ERR_BUYER_NOT_FOUND: &str = "buyer_id doesn't exists";
pub const ERR_RECORD_NOT_FOUND: &str = "product_records_id doesn't exists";

#[derive(Clone)]
pub struct PurchaseOrderService {
    repo: Arc<dyn PurchaseOrderRepository>,
}

impl PurchaseOrderService {
    pub fn new(repo: Arc<dyn PurchaseOrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, mut order: PurchaseOrder) -> Result<PurchaseOrder, AppError> {
        if !self.repo.buyer_exists(order.buyer_id).await {
            return Err(AppError::conflict(ERR_BUYER_NOT_FOUND));
        }
        if !self.repo.product_record_exists(order.product_record_id).await {
            return Err(AppError::conflict(ERR_RECORD_NOT_FOUND));
        }

        order.id = self.repo.save(&order).await?;

        Ok(order)
    }

    pub async fn report_by_buyer(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<PurchaseOrdersReport>, AppError> {
        if let Some(id) = id {
            if !self.repo.buyer_exists(id).await {
                return Err(AppError::not_found(ERR_BUYER_NOT_FOUND));
            }
        }

        Ok(self.repo.report_by_buyer(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use crate::mocks::MockPurchaseOrderRepository;

    fn sample_order() -> PurchaseOrder {
        PurchaseOrder {
            id: 0,
            order_number: "order#1".to_string(),
            order_date: Utc.with_ymd_and_hms(2021, 4, 4, 10, 0, 0).unwrap(),
            tracking_code: "abscf123".to_string(),
            buyer_id: 1,
            product_record_id: 1,
            order_status_id: 1,
        }
    }

    #[tokio::test]
    async fn create_rejects_unknown_buyer() {
        let repo = MockPurchaseOrderRepository::new();
        repo.set_buyer_exists(false);
        let service = PurchaseOrderService::new(Arc::new(repo));

        let err = service.save(sample_order()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_BUYER_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_rejects_unknown_product_record() {
        let repo = MockPurchaseOrderRepository::new();
        repo.set_product_record_exists(false);
        let service = PurchaseOrderService::new(Arc::new(repo));

        let err = service.save(sample_order()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_RECORD_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_assigns_id() {
        let service = PurchaseOrderService::new(Arc::new(MockPurchaseOrderRepository::new()));

        let saved = service.save(sample_order()).await.unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.order_number, "order#1");
    }

    #[tokio::test]
    async fn report_with_unknown_buyer_is_not_found() {
        let repo = MockPurchaseOrderRepository::new();
        repo.set_buyer_exists(false);
        let service = PurchaseOrderService::new(Arc::new(repo));

        let err = service.report_by_buyer(Some(4)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
