// src/handlers/buyer.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    common::{error::ApiError, web},
    config::AppState,
};

// ---
// Payload: CreateBuyerPayload
// ---
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBuyerPayload {
    #[validate(
        required(message = "card_number_id is required"),
        length(min = 1, message = "card_number_id is required")
    )]
    pub card_number_id: Option<String>,

    #[validate(
        required(message = "first_name is required"),
        length(min = 1, message = "first_name is required")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "last_name is required"),
        length(min = 1, message = "last_name is required")
    )]
    pub last_name: Option<String>,
}

// ---
// Payload: UpdateBuyerPayload
// ---
#[derive(Debug, Deserialize)]
pub struct UpdateBuyerPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let buyers = app_state
        .buyer_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string()))?;

    Ok(web::success(StatusCode::OK, buyers))
}

// ---
// Handler: get
// ---
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;

    let buyer = app_state
        .buyer_service
        .get(id)
        .await
        .map_err(|_| ApiError::new(StatusCode::NOT_FOUND, "there is no buyers"))?;

    // A rota devolve o comprador dentro de uma lista.
    Ok(web::success(StatusCode::OK, vec![buyer]))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateBuyerPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })?;

    payload.validate().map_err(|errors| {
        ApiError::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            web::validation_message(&errors),
        )
    })?;

    let buyer = app_state
        .buyer_service
        .save(
            payload.card_number_id.as_deref().unwrap_or_default(),
            payload.first_name.as_deref().unwrap_or_default(),
            payload.last_name.as_deref().unwrap_or_default(),
        )
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, buyer))
}

// ---
// Handler: update
// ---
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBuyerPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;
    let Json(payload) =
        payload.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let buyer = app_state
        .buyer_service
        .update(
            id,
            payload.first_name.as_deref(),
            payload.last_name.as_deref(),
        )
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, buyer))
}

// ---
// Handler: delete
// ---
pub async fn delete(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;

    app_state
        .buyer_service
        .delete(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::NO_CONTENT, ()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        config::AppState,
        mocks::{self, MockBuyerRepository},
        models::buyer::Buyer,
        routes,
        services::BuyerService,
    };

    fn seeded_state() -> AppState {
        let mut state = mocks::test_state();
        state.buyer_service = BuyerService::new(Arc::new(MockBuyerRepository::with_data(vec![
            Buyer {
                id: 1,
                card_number_id: "402323".to_string(),
                first_name: "Jhon".to_string(),
                last_name: "Doe".to_string(),
            },
        ])));
        state
    }

    #[tokio::test]
    async fn create_wraps_buyer_in_data_envelope() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/buyers",
                json!({"card_number_id": "402323", "first_name": "Jhon", "last_name": "Doe"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"data": {"id": 1, "card_number_id": "402323", "first_name": "Jhon", "last_name": "Doe"}})
        );
    }

    #[tokio::test]
    async fn create_missing_card_number_is_unprocessable() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/buyers",
                json!({"first_name": "Jhon", "last_name": "Doe"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "card_number_id is required");
    }

    #[tokio::test]
    async fn create_duplicate_card_number_conflicts() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/buyers",
                json!({"card_number_id": "402323", "first_name": "Maria", "last_name": "Silva"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "duplicate cardNumberID");
    }

    #[tokio::test]
    async fn get_wraps_buyer_in_a_list() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(app, mocks::request("GET", "/api/v1/buyers/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().map(|rows| rows.len()), Some(1));
        assert_eq!(body["data"][0]["card_number_id"], "402323");
    }

    #[tokio::test]
    async fn get_with_malformed_id_is_bad_request() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(app, mocks::request("GET", "/api/v1/buyers/abc")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid id");
    }

    #[tokio::test]
    async fn get_missing_buyer_uses_route_message() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(app, mocks::request("GET", "/api/v1/buyers/9")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "there is no buyers");
    }

    #[tokio::test]
    async fn patch_keeps_fields_the_body_leaves_out() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request("PATCH", "/api/v1/buyers/1", json!({"first_name": "Maria"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["first_name"], "Maria");
        assert_eq!(body["data"]["last_name"], "Doe");
    }

    #[tokio::test]
    async fn delete_responds_no_content_without_body() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(app, mocks::request("DELETE", "/api/v1/buyers/1")).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());
    }
}
