// src/handlers/seller.rs

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::{
    common::{
        error::{ApiError, AppError},
        web,
    },
    config::AppState,
    models::seller::{Seller, SellerPatch},
};

// ---
// Payload: CreateSellerPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateSellerPayload {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i32>,
}

// ---
// Handler: get_all
// ---
pub async fn get_all(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let sellers = app_state
        .seller_service
        .get_all()
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, sellers))
}

// ---
// Handler: get
// ---
pub async fn get(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // A rota de sellers responde 417 para id malformado.
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::EXPECTATION_FAILED, "invalid id"))?;

    let seller = app_state
        .seller_service
        .get(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, seller))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateSellerPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::new(StatusCode::NOT_FOUND, rejection.body_text()))?;

    let cid = payload.cid.unwrap_or_default();
    if cid < 0 {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "incorrect field content",
        ));
    }

    let seller = Seller {
        id: 0,
        cid,
        company_name: payload.company_name.unwrap_or_default(),
        address: payload.address.unwrap_or_default(),
        telephone: payload.telephone.unwrap_or_default(),
        locality_id: payload.locality_id.unwrap_or_default(),
    };

    let seller = app_state.seller_service.save(seller).await.map_err(|err| {
        let status = match &err {
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::BAD_REQUEST,
        };
        ApiError::new(status, err.to_string())
    })?;

    Ok(web::success(StatusCode::CREATED, seller))
}

// ---
// Handler: update
// ---
pub async fn update(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SellerPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id: i32 = id
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;
    let Json(patch) =
        payload.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let seller = app_state
        .seller_service
        .update(id, patch)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, seller))
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
        .seller_service
        .delete(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    // A exclusão responde 200 com um objeto vazio, não 204.
    Ok(web::success(StatusCode::OK, json!({})))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        config::AppState,
        mocks::{self, MockSellerRepository},
        models::seller::Seller,
        routes,
        services::SellerService,
    };

    fn seeded_state() -> AppState {
        let mut state = mocks::test_state();
        state.seller_service = SellerService::new(Arc::new(MockSellerRepository::with_data(vec![
            Seller {
                id: 1,
                cid: 55,
                company_name: "Mercado Libre".to_string(),
                address: "Ramallo 6023".to_string(),
                telephone: "48669000".to_string(),
                locality_id: 1,
            },
        ])));
        state
    }

    #[tokio::test]
    async fn create_responds_created_with_saved_seller() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/sellers",
                json!({
                    "cid": 55,
                    "company_name": "Mercado Libre",
                    "address": "Ramallo 6023",
                    "telephone": "48669000",
                    "locality_id": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["cid"], 55);
    }

    #[tokio::test]
    async fn create_negative_cid_is_bad_request() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/sellers",
                json!({
                    "cid": -5,
                    "company_name": "Mercado Libre",
                    "address": "Ramallo 6023",
                    "telephone": "48669000",
                    "locality_id": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "incorrect field content");
    }

    #[tokio::test]
    async fn create_blank_fields_are_unprocessable() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/sellers",
                json!({"cid": 55, "locality_id": 1}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "field required");
    }

    #[tokio::test]
    async fn get_with_malformed_id_is_expectation_failed() {
        let app = routes::api_router(seeded_state());

        let (status, _body) = mocks::send(app, mocks::request("GET", "/api/v1/sellers/abc")).await;

        assert_eq!(status, StatusCode::EXPECTATION_FAILED);
    }

    #[tokio::test]
    async fn delete_responds_ok_with_empty_object() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(app, mocks::request("DELETE", "/api/v1/sellers/1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"data": {}}));
    }
}
