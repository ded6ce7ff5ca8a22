// src/services/section_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::SectionRepository,
    models::section::{Section, SectionPatch},
};

pub const ERR_NOT_FOUND: &str = "section not found";
pub const ERR_EXISTS: &str = "section already exists";

#[derive(Clone)]
pub struct SectionService {
    repo: Arc<dyn SectionRepository>,
}

impl SectionService {
    pub fn new(repo: Arc<dyn SectionRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Section>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Section, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))
    }

    pub async fn save(&self, mut section: Section) -> Result<Section, AppError> {
        if self.repo.exists(section.section_number).await {
            return Err(AppError::conflict(ERR_EXISTS));
        }

        section.id = self
            .repo
            .save(&section)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_EXISTS))?;

        Ok(section)
    }

    /// Campos numéricos usam zero como sentinela de ausência, então um zero
    /// explícito no patch não sobrescreve o valor armazenado.
    pub async fn update(&self, id: i32, patch: SectionPatch) -> Result<Section, AppError> {
        let mut section = self
            .repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        let fields = [
            (patch.section_number, &mut section.section_number),
            (patch.current_temperature, &mut section.current_temperature),
            (patch.minimum_temperature, &mut section.minimum_temperature),
            (patch.current_capacity, &mut section.current_capacity),
            (patch.minimum_capacity, &mut section.minimum_capacity),
            (patch.maximum_capacity, &mut section.maximum_capacity),
            (patch.warehouse_id, &mut section.warehouse_id),
            (patch.product_type_id, &mut section.product_type_id),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                if value != 0 {
                    *slot = value;
                }
            }
        }

        self.repo.update(&section).await?;

        Ok(section)
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
    use crate::mocks::MockSectionRepository;

    fn sample_section() -> Section {
        Section {
            id: 0,
            section_number: 10,
            current_temperature: 15,
            minimum_temperature: 5,
            current_capacity: 20,
            minimum_capacity: 10,
            maximum_capacity: 50,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_section_number() {
        let mut existing = sample_section();
        existing.id = 1;
        let service =
            SectionService::new(Arc::new(MockSectionRepository::with_data(vec![existing])));

        let err = service.save(sample_section()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_EXISTS);
    }

    #[tokio::test]
    async fn update_treats_zero_as_absent() {
        let mut existing = sample_section();
        existing.id = 1;
        let service =
            SectionService::new(Arc::new(MockSectionRepository::with_data(vec![existing])));

        let patch = SectionPatch {
            current_capacity: Some(0),
            maximum_capacity: Some(80),
            ..SectionPatch::default()
        };
        let updated = service.update(1, patch).await.unwrap();

        assert_eq!(updated.current_capacity, 20);
        assert_eq!(updated.maximum_capacity, 80);
    }

    #[tokio::test]
    async fn delete_then_get_fails() {
        let mut existing = sample_section();
        existing.id = 1;
        let service =
            SectionService::new(Arc::new(MockSectionRepository::with_data(vec![existing])));

        service.delete(1).await.unwrap();

        let err = service.get(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
