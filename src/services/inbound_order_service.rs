// src/services/inbound_order_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::InboundOrderRepository,
    models::inbound_order::InboundOrder,
};

pub const ERR_ORDER_EXISTS: &str = "The order_number already exists";
pub const ERR_EMPLOYEE_NOT_FOUND: &str = "The employee not exists";

#[derive(Clone)]
pub struct InboundOrderService {
    repo: Arc<dyn InboundOrderRepository>,
}

impl InboundOrderService {
    pub fn new(repo: Arc<dyn InboundOrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<InboundOrder>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn save(&self, mut order: InboundOrder) -> Result<InboundOrder, AppError> {
        if self.repo.exists(&order.order_number).await {
            return Err(AppError::conflict(ERR_ORDER_EXISTS));
        }
        if !self.repo.employee_exists(order.employee_id).await {
            return Err(AppError::conflict(ERR_EMPLOYEE_NOT_FOUND));
        }

        order.id = self
            .repo
            .save(&order)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_ORDER_EXISTS))?;

        Ok(order)
    }
}
