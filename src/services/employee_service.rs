// src/services/employee_service.rs

use std::sync::Arc;

use crate::{
    common::error::{self, AppError},
    db::EmployeeRepository,
    models::employee::{Employee, InboundOrdersReport},
};

pub const ERR_NOT_FOUND: &str = "employee not found";
pub const ERR_CARD_EXISTS: &str = "The card_number_id already exists";

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.repo.get_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Employee, AppError> {
        self.repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))
    }

    pub async fn save(&self, mut employee: Employee) -> Result<Employee, AppError> {
        if self.repo.exists(&employee.card_number_id).await {
            return Err(AppError::conflict(ERR_CARD_EXISTS));
        }

        employee.id = self
            .repo
            .save(&employee)
            .await
            .map_err(|err| error::unique_conflict(err, ERR_CARD_EXISTS))?;

        Ok(employee)
    }

    /// O card_number_id nunca é alterado aqui; o adaptador rejeita a tentativa.
    pub async fn update(
        &self,
        id: i32,
        first_name: Option<&str>,
        last_name: Option<&str>,
        warehouse_id: Option<i32>,
    ) -> Result<Employee, AppError> {
        let mut employee = self
            .repo
            .get(id)
            .await
            .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;

        if let Some(name) = first_name {
            if !name.is_empty() {
                employee.first_name = name.to_string();
            }
        }
        if let Some(name) = last_name {
            if !name.is_empty() {
                employee.last_name = name.to_string();
            }
        }
        if let Some(warehouse_id) = warehouse_id {
            employee.warehouse_id = warehouse_id;
        }

        self.repo.update(&employee).await?;

        Ok(employee)
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

    pub async fn report_inbound_orders(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<InboundOrdersReport>, AppError> {
        if let Some(id) = id {
            self.repo
                .get(id)
                .await
                .map_err(|_| AppError::not_found(ERR_NOT_FOUND))?;
        }

        Ok(self.repo.report_inbound_orders(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockEmployeeRepository;

    fn sample_employee() -> Employee {
        Employee {
            id: 0,
            card_number_id: "402323".to_string(),
            first_name: "Jhon".to_string(),
            last_name: "Doe".to_string(),
            warehouse_id: 1,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_card_number() {
        let mut existing = sample_employee();
        existing.id = 1;
        let service =
            EmployeeService::new(Arc::new(MockEmployeeRepository::with_data(vec![existing])));

        let err = service.save(sample_employee()).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(err.to_string(), ERR_CARD_EXISTS);
    }

    #[tokio::test]
    async fn update_can_move_employee_to_warehouse_zero() {
        let mut existing = sample_employee();
        existing.id = 1;
        let service =
            EmployeeService::new(Arc::new(MockEmployeeRepository::with_data(vec![existing])));

        let updated = service.update(1, None, None, Some(0)).await.unwrap();

        assert_eq!(updated.warehouse_id, 0);
        assert_eq!(updated.first_name, "Jhon");
    }

    #[tokio::test]
    async fn report_with_unknown_employee_is_not_found() {
        let service = EmployeeService::new(Arc::new(MockEmployeeRepository::with_data(vec![])));

        let err = service.report_inbound_orders(Some(9)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.to_string(), ERR_NOT_FOUND);
    }

    #[tokio::test]
    async fn report_without_filter_counts_every_employee() {
        let mut first = sample_employee();
        first.id = 1;
        let mut second = sample_employee();
        second.id = 2;
        second.card_number_id = "402324".to_string();
        let service = EmployeeService::new(Arc::new(MockEmployeeRepository::with_data(vec![
            first, second,
        ])));

        let rows = service.report_inbound_orders(None).await.unwrap();

        assert_eq!(rows.len(), 2);
    }
}
