// src/services/buyer_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::BuyerRepository,
    models::buyer::Buyer,
};

pub const ERR_NOT_FOUND: &str = "buyer not found";
pub const ERR_DUPLICATE_CARD: &str = "duplicate cardNumberID";

#[derive(Clone)]
pub struct BuyerService {
    repo: Arc<dyn BuyerRepository>,
}

impl BuyerService {
    pub fn new(repo: Arc<dyn BuyerRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Buyer>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Buyer, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))
    }

    pub async fn save(
        &self,
        card_number_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Buyer, AppError> {
        if self.repo.exists(card_number_id).await {
            return Err(AppError::conflict(ERR_DUPLICATE_CARD));
        }

        let mut buyer = Buyer {
            id: 0,
            card_number_id: card_number_id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        buyer.id = self
            .repo
            .save(&buyer)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_DUPLICATE_CARD))?;

        Ok(buyer)
    }

    /// Merge parcial: campos ausentes ou vazios mantêm o valor armazenado.
    pub async fn update(
        &self,
        id: i32,
        first_name: Option<&str>,
        last_name: Option<&str>,
    ) -> Result<Buyer, AppError> {
        let mut buyer = self
            .repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        if let Some(name) = first_name {
            if !name.is_empty() {
                buyer.first_name = name.to_string();
            }
        }
        if let Some(name) = last_name {
            if !name.is_empty() {
                buyer.last_name = name.to_string();
            }
        }

        self.repo.update(&buyer).await?;

        Ok(buyer)
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockBuyerRepository;

    fn seeded_service() -> BuyerService {
        let repo = MockBuyerRepository::with_data(vec![
            Buyer {
                id: 1,
                card_number_id: "234".to_string(),
                first_name: "Jhon".to_string(),
                last_name: "Doe".to_string(),
            },
            Buyer {
                id: 2,
                card_number_id: "235".to_string(),
                first_name: "Jhon".to_string(),
                last_name: "Doe".to_string(),
            },
        ]);
        BuyerService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let service = seeded_service();

        let saved = service.save("236", "Maria", "Silva").await.unwrap();

        assert_eq!(saved.id, 3);
        assert_eq!(saved.card_number_id, "236");
        assert_eq!(service.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_card_and_keeps_store_untouched() {
        let service = seeded_service();

        let err = service.save("234", "Maria", "Silva").await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_DUPLICATE_CARD);
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let service = seeded_service();

        let err = service.get(99).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), ERR_NOT_FOUND);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let service = seeded_service();

        let updated = service.update(1, Some("hello_2"), None).await.unwrap();

        assert_eq!(updated.first_name, "hello_2");
        assert_eq!(updated.last_name, "Doe");
        assert_eq!(updated.card_number_id, "234");
    }

    #[tokio::test]
    async fn delete_removes_record_then_get_fails() {
        let service = seeded_service();

        service.delete(1).await.unwrap();

        assert!(service.get(1).await.is_err());
        assert_eq!(service.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let service = seeded_service();

        let err = service.delete(99).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
