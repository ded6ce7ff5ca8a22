// src/services/carry_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::CarryRepository,
    models::carry::Carry,
};

pub const ERR_CID_EXISTS: &str = "carry code already exists";
pub const ERR_LOCALITY_NOT_FOUND: &str = "locality code doesn't exists";

#[derive(Clone)]
pub struct CarryService {
    repo: Arc<dyn CarryRepository>,
}

impl CarryService {
    pub fn new(repo: Arc<dyn CarryRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, mut carry: Carry) -> Result<Carry, AppError> {
        if self.repo.exists(&carry.cid).await {
            return Err(AppError::conflict(ERR_CID_EXISTS));
        }
        if !self.repo.locality_exists(carry.locality_id).await {
            return Err(AppError::conflict(ERR_LOCALITY_NOT_FOUND));
        }

        carry.id = self
            .repo
            .save(&carry)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_CID_EXISTS))?;

        Ok(carry)
    }
}
