// src/services/seller_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::SellerRepository,
    models::seller::{Seller, SellerPatch},
};

pub const ERR_NOT_FOUND: &str = "seller not found";
pub const ERR_REQUIRED: &str = "field required";
pub const ERR_CID_EXISTS: &str = "cid already exists";
pub const ERR_LOCALITY_NOT_FOUND: &str = "locality id not found";

#[derive(Clone)]
pub struct SellerService {
    repo: Arc<dyn SellerRepository>,
}

impl SellerService {
    pub fn new(repo: Arc<dyn SellerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Seller>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Seller, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))
    }

    /// As sondas vêm antes das checagens de preenchimento: um cid duplicado
    /// responde conflito mesmo que o resto do corpo esteja incompleto.
    pub async fn save(&self, mut seller: Seller) -> Result<Seller, AppError> {
        if self.repo.exists(seller.cid).await {
            return Err(AppError::conflict(ERR_CID_EXISTS));
        }
        if !self.repo.locality_exists(seller.locality_id).await {
            return Err(AppError::conflict(ERR_LOCALITY_NOT_FOUND));
        }
        if seller.address.is_empty()
            || seller.company_name.is_empty()
            || seller.telephone.is_empty()
            || seller.cid == 0
        {
            return Err(AppError::validation(ERR_REQUIRED));
        }

        seller.id = self
            .repo
            .save(&seller)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_CID_EXISTS))?;

        Ok(seller)
    }

    pub async fn update(&self, id: i32, patch: SellerPatch) -> Result<Seller, AppError> {
        let mut seller = self
            .repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        if let Some(cid) = patch.cid {
            if cid > 0 {
                seller.cid = cid;
            }
        }
        if let Some(company_name) = patch.company_name {
            if !company_name.is_empty() {
                seller.company_name = company_name;
            }
        }
        if let Some(address) = patch.address {
            if !address.is_empty() {
                seller.address = address;
            }
        }
        if let Some(telephone) = patch.telephone {
            if !telephone.is_empty() {
                seller.telephone = telephone;
            }
        }
        if let Some(locality_id) = patch.locality_id {
            if locality_id > 0 {
                seller.locality_id = locality_id;
            }
        }

        self.repo.update(&seller).await?;

        Ok(seller)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let affected = self.repo.delete(id).await?;
        if affected < 1 {
            return Err(AppError::not_found(ERR_NOT_FOUND));
        }

        Ok(())
    }
}
