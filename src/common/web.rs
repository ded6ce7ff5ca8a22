// src/common/web.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

/// Envelope de sucesso da API: `{ "data": ... }`. 204 não envia corpo.
pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    if status == StatusCode::NO_CONTENT {
        return status.into_response();
    }

    (status, Json(json!({ "data": data }))).into_response()
}

/// Junta as mensagens do validator numa única linha, ordenada por campo para
/// manter a saída estável.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let mut parts = Vec::new();
    for (field, field_errors) in fields {
        for err in field_errors {
            match &err.message {
                Some(message) => parts.push(message.to_string()),
                None => parts.push(format!("{} is invalid", field)),
            }
        }
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(required(message = "card_number_id is required"))]
        card_number_id: Option<String>,
        #[validate(required(message = "first_name is required"))]
        first_name: Option<String>,
    }

    #[test]
    fn joins_messages_sorted_by_field() {
        let sample = Sample {
            card_number_id: None,
            first_name: None,
        };

        let errors = sample.validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "card_number_id is required, first_name is required"
        );
    }

    #[test]
    fn single_missing_field_yields_its_message() {
        let sample = Sample {
            card_number_id: Some("232345".to_string()),
            first_name: None,
        };

        let errors = sample.validate().unwrap_err();
        assert_eq!(validation_message(&errors), "first_name is required");
    }
}
