// src/handlers/carry.rs

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    common::{error::ApiError, web},
    config::AppState,
    models::carry::Carry,
};

// ---
// Payload: CreateCarryPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateCarryPayload {
    pub cid: Option<String>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

impl CreateCarryPayload {
    // Só os campos texto entram na checagem; locality_id ausente vira zero e
    // cai na validação de existência do serviço.
    fn empty_fields(&self) -> Vec<&'static str> {
        let mut empty = Vec::new();
        if self.cid.as_deref().unwrap_or_default().is_empty() {
            empty.push("CID");
        }
        if self.company_name.as_deref().unwrap_or_default().is_empty() {
            empty.push("Company_name");
        }
        if self.address.as_deref().unwrap_or_default().is_empty() {
            empty.push("Address");
        }
        if self.telephone.as_deref().unwrap_or_default().is_empty() {
            empty.push("Telephone");
        }
        empty
    }
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateCarryPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    let empty = payload.empty_fields();
    if !empty.is_empty() {
        return Err(ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("empty fields: {}", empty.join(", ")),
        ));
    }

    let carry = Carry {
        id: 0,
        cid: payload.cid.unwrap_or_default(),
        company_name: payload.company_name.unwrap_or_default(),
        address: payload.address.unwrap_or_default(),
        telephone: payload.telephone.unwrap_or_default(),
        locality_id: payload.locality_id.unwrap_or_default(),
    };

    let carry = app_state
        .carry_service
        .save(carry)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, carry))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        mocks::{self, MockCarryRepository},
        routes,
        services::CarryService,
    };

    #[tokio::test]
    async fn create_lists_every_empty_field() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/carries",
                json!({"cid": "CID#1", "locality_id": 6700}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["message"],
            "empty fields: Company_name, Address, Telephone"
        );
    }

    #[tokio::test]
    async fn create_responds_created_with_saved_carry() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/carries",
                json!({
                    "cid": "CID#1",
                    "company_name": "some name",
                    "address": "corrientes 800",
                    "telephone": "4567-4567",
                    "locality_id": 6700
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["cid"], "CID#1");
    }

    #[tokio::test]
    async fn create_unknown_locality_conflicts() {
        let mut state = mocks::test_state();
        let repo = MockCarryRepository::with_data(vec![]);
        repo.set_locality_exists(false);
        state.carry_service = CarryService::new(Arc::new(repo));
        let app = routes::api_router(state);

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/carries",
                json!({
                    "cid": "CID#1",
                    "company_name": "some name",
                    "address": "corrientes 800",
                    "telephone": "4567-4567",
                    "locality_id": 9999
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "locality code doesn't exists");
    }
}
