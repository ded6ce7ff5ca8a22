// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{config::AppState, handlers};

/// Monta o router completo da API, com um sub-router por recurso.
pub fn api_router(state: AppState) -> Router {
    let buyer_routes = Router::new()
        .route(
            "/",
            get(handlers::buyer::get_all).post(handlers::buyer::create),
        )
        // A rota estática precisa vir declarada junto das demais; o axum dá
        // prioridade a ela sobre a captura {id}.
        .route(
            "/reportPurchaseOrders",
            get(handlers::purchase_order::report_by_buyer),
        )
        .route(
            "/{id}",
            get(handlers::buyer::get)
                .patch(handlers::buyer::update)
                .delete(handlers::buyer::delete),
        );

    let seller_routes = Router::new()
        .route(
            "/",
            get(handlers::seller::get_all).post(handlers::seller::create),
        )
        .route(
            "/{id}",
            get(handlers::seller::get)
                .patch(handlers::seller::update)
                .delete(handlers::seller::delete),
        );

    let product_routes = Router::new()
        .route(
            "/",
            get(handlers::product::get_all).post(handlers::product::create),
        )
        .route("/reportRecords", get(handlers::product::report_records))
        .route(
            "/{id}",
            get(handlers::product::get)
                .patch(handlers::product::update)
                .delete(handlers::product::delete),
        );

    let section_routes = Router::new()
        .route(
            "/",
            get(handlers::section::get_all).post(handlers::section::create),
        )
        .route(
            "/{id}",
            get(handlers::section::get)
                .patch(handlers::section::update)
                .delete(handlers::section::delete),
        );

    let warehouse_routes = Router::new()
        .route(
            "/",
            get(handlers::warehouse::get_all).post(handlers::warehouse::create),
        )
        .route(
            "/{id}",
            get(handlers::warehouse::get)
                .patch(handlers::warehouse::update)
                .delete(handlers::warehouse::delete),
        );

    let employee_routes = Router::new()
        .route(
            "/",
            get(handlers::employee::get_all).post(handlers::employee::create),
        )
        .route(
            "/reportInboundOrders",
            get(handlers::employee::report_inbound_orders),
        )
        .route(
            "/{id}",
            get(handlers::employee::get)
                .patch(handlers::employee::update)
                .delete(handlers::employee::delete),
        );

    let inbound_order_routes = Router::new().route(
        "/",
        get(handlers::inbound_order::get_all).post(handlers::inbound_order::create),
    );

    let purchase_order_routes = Router::new().route("/", post(handlers::purchase_order::create));

    let product_record_routes = Router::new().route("/", post(handlers::product_record::create));

    let product_batch_routes = Router::new().route("/", post(handlers::product_batch::create));

    let locality_routes = Router::new()
        .route("/", post(handlers::locality::create))
        .route("/reportSellers", get(handlers::locality::report_sellers))
        .route("/reportCarries", get(handlers::locality::report_carries));

    let carry_routes = Router::new().route("/", post(handlers::carry::create));

    Router::new()
        .route("/ping", get(|| async { "pong" }))
        // O relatório de lotes por seção fica na raiz da API, fora do recurso.
        .route(
            "/api/v1/reportProducts",
            get(handlers::product_batch::report_products),
        )
        .nest("/api/v1/buyers", buyer_routes)
        .nest("/api/v1/sellers", seller_routes)
        .nest("/api/v1/products", product_routes)
        .nest("/api/v1/sections", section_routes)
        .nest("/api/v1/warehouses", warehouse_routes)
        .nest("/api/v1/employees", employee_routes)
        .nest("/api/v1/inboundOrders", inbound_order_routes)
        .nest("/api/v1/purchaseOrders", purchase_order_routes)
        .nest("/api/v1/productRecords", product_record_routes)
        .nest("/api/v1/productbatches", product_batch_routes)
        .nest("/api/v1/localities", locality_routes)
        .nest("/api/v1/carries", carry_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
