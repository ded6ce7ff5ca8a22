// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Taxonomia fechada de erros de domínio. Os handlers escolhem o status HTTP
// olhando a variante, nunca o texto da mensagem.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    // Variante para erros de banco de dados (sqlx)
    #[error("{0}")]
    Store(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }
}

/// Converte violação de índice único num conflito de domínio; qualquer outro
/// erro segue como `Store`. Fecha a janela de corrida entre a sonda de
/// existência e o INSERT.
pub fn unique_conflict(err: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            return AppError::conflict(message);
        }
    }
    AppError::Store(err)
}

// Erro já resolvido em status + mensagem, pronto para virar resposta HTTP.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

// Mapeamento padrão variante -> status; os handlers sobrescrevem onde o
// contrato público da rota desvia da convenção.
impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        let status = match &err {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Store(e) => {
                tracing::error!("erro de banco de dados: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // O campo `code` carrega o texto canônico do status em snake_case,
        // ex.: "unprocessable_entity".
        let code = self
            .status
            .canonical_reason()
            .unwrap_or("unknown")
            .to_lowercase()
            .replace(' ', "_");

        let body = Json(json!({ "code": code, "message": self.message }));
        (self.status, body).into_response()
    }
}
