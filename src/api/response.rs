use serde::Serialize;

/// The uniform response envelope. `None` fields are omitted from the JSON,
/// so success responses carry whichever of message/data the endpoint
/// supplies and error responses carry a message only.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope with a message and no payload (delete-style
    /// operations).
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: Some(message.into()),
            data: None,
        }
    }

    /// Error envelope for business failures (not-found, upstream).
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Lightweight error shape used only by validation failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_carries_message_and_data() {
        let envelope = ApiResponse::success("Branch retrieved successfully", json!({"id": "1"}));
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({
                "status": "success",
                "message": "Branch retrieved successfully",
                "data": {"id": "1"},
            })
        );
    }

    #[test]
    fn message_only_envelope_omits_data() {
        let value = serde_json::to_value(ApiResponse::message("Branch deleted successfully"))
            .unwrap();
        assert_eq!(
            value,
            json!({"status": "success", "message": "Branch deleted successfully"})
        );
    }

    #[test]
    fn error_envelope_has_error_status() {
        let value =
            serde_json::to_value(ApiResponse::error("Branch with ID 7 does not exist")).unwrap();
        assert_eq!(
            value,
            json!({"status": "error", "message": "Branch with ID 7 does not exist"})
        );
    }

    #[test]
    fn validation_shape_is_a_bare_error_field() {
        let value = serde_json::to_value(ErrorResponse::new(
            "Validation error: Body: Address cannot be empty",
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({"error": "Validation error: Body: Address cannot be empty"})
        );
    }
}
