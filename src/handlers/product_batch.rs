// src/handlers/product_batch.rs

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::{
    common::{error::ApiError, web},
    config::AppState,
    models::product_batch::ProductBatch,
};

// ---
// Payload: CreateProductBatchPayload
// ---
#[derive(Debug, Deserialize)]
pub struct CreateProductBatchPayload {
    #[serde(default)]
    pub batch_number: i32,
    #[serde(default)]
    pub current_quantity: i32,
    #[serde(default)]
    pub current_temperature: i32,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub initial_quantity: i32,
    #[serde(default)]
    pub manufacturing_date: String,
    #[serde(default)]
    pub manufacturing_hour: i32,
    #[serde(default)]
    pub minimum_temperature: i32,
    #[serde(default)]
    pub product_id: i32,
    #[serde(default)]
    pub section_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub id: Option<String>,
}

// Datas malformadas respondem 409 nesta rota.
fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::new(StatusCode::CONFLICT, "invalid date example 2008-01-02"))
}

// ---
// Handler: create
// ---
pub async fn create(
    State(app_state): State<AppState>,
    payload: Result<Json<CreateProductBatchPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) =
        payload.map_err(|rejection| ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text()))?;

    let due_date = parse_date(&payload.due_date)?;
    let manufacturing_date = parse_date(&payload.manufacturing_date)?;

    let batch = ProductBatch {
        id: 0,
        batch_number: payload.batch_number,
        current_quantity: payload.current_quantity,
        current_temperature: payload.current_temperature,
        due_date,
        initial_quantity: payload.initial_quantity,
        manufacturing_date,
        manufacturing_hour: payload.manufacturing_hour,
        minimum_temperature: payload.minimum_temperature,
        product_id: payload.product_id,
        section_id: payload.section_id,
    };

    let batch = app_state
        .product_batch_service
        .save(batch)
        .await
        .map_err(|err| ApiError::new(StatusCode::CONFLICT, err.to_string()))?;

    Ok(web::success(StatusCode::CREATED, batch))
}

// ---
// Handler: report_products
// ---
pub async fn report_products(
    State(app_state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // Diferente dos demais relatórios, o id aqui é obrigatório.
    let id: i32 = query
        .id
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|_| ApiError::new(StatusCode::BAD_REQUEST, "invalid id"))?;

    let report = app_state
        .product_batch_service
        .section_report(id)
        .await
        .map_err(|err| ApiError::new(StatusCode::NOT_FOUND, err.to_string()))?;

    Ok(web::success(StatusCode::OK, report))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use serde_json::json;

    use crate::{
        config::AppState,
        mocks::{self, MockProductBatchRepository},
        models::product_batch::ProductBatch,
        routes,
        services::ProductBatchService,
    };

    fn seeded_state() -> AppState {
        let mut state = mocks::test_state();
        state.product_batch_service = ProductBatchService::new(Arc::new(
            MockProductBatchRepository::with_data(vec![ProductBatch {
                id: 1,
                batch_number: 111,
                current_quantity: 200,
                current_temperature: 20,
                due_date: NaiveDate::from_ymd_opt(2022, 4, 4).unwrap(),
                initial_quantity: 10,
                manufacturing_date: NaiveDate::from_ymd_opt(2020, 4, 4).unwrap(),
                manufacturing_hour: 10,
                minimum_temperature: 5,
                product_id: 1,
                section_id: 1,
            }]),
        ));
        state
    }

    #[tokio::test]
    async fn create_responds_created_with_saved_batch() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/productbatches",
                json!({
                    "batch_number": 111,
                    "current_quantity": 200,
                    "current_temperature": 20,
                    "due_date": "2022-04-04",
                    "initial_quantity": 10,
                    "manufacturing_date": "2020-04-04",
                    "manufacturing_hour": 10,
                    "minimum_temperature": 5,
                    "product_id": 1,
                    "section_id": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["batch_number"], 111);
    }

    #[tokio::test]
    async fn create_malformed_date_conflicts() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/productbatches",
                json!({
                    "batch_number": 111,
                    "due_date": "04/04/2022",
                    "manufacturing_date": "2020-04-04",
                    "product_id": 1,
                    "section_id": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "invalid date example 2008-01-02");
    }

    #[tokio::test]
    async fn create_duplicate_batch_number_conflicts() {
        let app = routes::api_router(seeded_state());

        let (status, body) = mocks::send(
            app,
            mocks::json_request(
                "POST",
                "/api/v1/productbatches",
                json!({
                    "batch_number": 111,
                    "due_date": "2022-04-04",
                    "manufacturing_date": "2020-04-04",
                    "product_id": 1,
                    "section_id": 1
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "product_batches already exists");
    }

    #[tokio::test]
    async fn report_without_id_is_bad_request() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) =
            mocks::send(app, mocks::request("GET", "/api/v1/reportProducts")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "invalid id");
    }

    #[tokio::test]
    async fn report_totals_section_quantity() {
        let app = routes::api_router(seeded_state());

        let (status, body) =
            mocks::send(app, mocks::request("GET", "/api/v1/reportProducts?id=1")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["section_id"], 1);
        assert_eq!(body["data"]["current_quantity"], 200);
    }

    #[tokio::test]
    async fn report_unknown_section_is_not_found() {
        let app = routes::api_router(mocks::test_state());

        let (status, body) =
            mocks::send(app, mocks::request("GET", "/api/v1/reportProducts?id=9")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "section_id not found");
    }
}
