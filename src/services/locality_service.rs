// src/services/locality_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::LocalityRepository,
    models::locality::{CarriesReport, Locality, SellersByLocalityReport},
};

pub const ERR_EXISTS: &str = "id already exists";
pub const ERR_SELLERS_REPORT_ID: &str = "locality_id not found";
pub const ERR_CARRIES_REPORT_ID: &str = "id does not exist";

#[derive(Clone)]
pub struct LocalityService {
    repo: Arc<dyn LocalityRepository>,
}

impl LocalityService {
    pub fn new(repo: Arc<dyn LocalityRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, locality: Locality) -> Result<Locality, AppError> {
        if self.repo.exists(locality.id).await {
            return Err(AppError::conflict(ERR_EXISTS));
        }

        self.repo
            .save(&locality)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_EXISTS))?;

        Ok(locality)
    }

    pub async fn sellers_report(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<SellersByLocalityReport>, AppError> {
        if let Some(id) = id {
            if !self.repo.exists(id).await {
                return Err(AppError::not_found(ERR_SELLERS_REPORT_ID));
            }
        }

        Ok(self.repo.sellers_report(id).await?)
    }

    pub async fn carries_report(&self, id: Option<i32>) -> Result<Vec<CarriesReport>, AppError> {
        if let Some(id) = id {
            if !self.repo.exists(id).await {
                return Err(AppError::not_found(ERR_CARRIES_REPORT_ID));
            }
        }

        Ok(self.repo.carries_report(id).await?)
    }
}
