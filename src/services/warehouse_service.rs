// src/services/warehouse_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::WarehouseRepository,
    models::warehouse::{Warehouse, WarehousePatch},
};

pub const ERR_NOT_FOUND: &str = "warehouse not found";
pub const ERR_CODE_EXISTS: &str = "warehouse code already exists";

#[derive(Clone)]
pub struct WarehouseService {
    repo: Arc<dyn WarehouseRepository>,
}

impl WarehouseService {
    pub fn new(repo: Arc<dyn WarehouseRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Warehouse>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Warehouse, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))
    }

    pub async fn save(&self, mut warehouse: Warehouse) -> Result<Warehouse, AppError> {
        if self.repo.exists(&warehouse.warehouse_code).await {
            return Err(AppError::conflict(ERR_CODE_EXISTS));
        }

        warehouse.id = self
            .repo
            .save(&warehouse)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_CODE_EXISTS))?;

        Ok(warehouse)
    }

    /// Números presentes sobrescrevem mesmo com zero; strings vazias não.
    pub async fn update(&self, id: i32, patch: WarehousePatch) -> Result<Warehouse, AppError> {
        let mut warehouse = self
            .repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        if let Some(address) = patch.address {
            if !address.is_empty() {
                warehouse.address = address;
            }
        }
        if let Some(telephone) = patch.telephone {
            if !telephone.is_empty() {
                warehouse.telephone = telephone;
            }
        }
        if let Some(warehouse_code) = patch.warehouse_code {
            if !warehouse_code.is_empty() {
                warehouse.warehouse_code = warehouse_code;
            }
        }
        if let Some(minimum_capacity) = patch.minimum_capacity {
            warehouse.minimum_capacity = minimum_capacity;
        }
        if let Some(minimum_temperature) = patch.minimum_temperature {
            warehouse.minimum_temperature = minimum_temperature;
        }

        self.repo.update(&warehouse).await?;

        Ok(warehouse)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let affected = self.repo.delete(id).await?;
        if affected < 1 {
            return Err(AppError::not_found(ERR_NOT_FOUND));
        }

        Ok(())
    }
}
