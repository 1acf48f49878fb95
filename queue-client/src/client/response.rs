//! Response decoding shared by every transport

use http::StatusCode;
use serde::de::DeserializeOwned;
use shared::ApiErrorBody;

use crate::{ClientError, ClientResult};

/// Turn a status and raw body into the expected value or a [`ClientError`]
///
/// An empty 2xx body decodes as JSON `null`, so `()` works for 204.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> ClientResult<T> {
    if !status.is_success() {
        return Err(error_from_body(status, body));
    }

    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"null"
    } else {
        body
    };
    serde_json::from_slice(body)
        .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
}

fn error_from_body(status: StatusCode, body: &[u8]) -> ClientError {
    // 尝试解析为 API 错误响应
    if let Ok(api_err) = serde_json::from_slice::<ApiErrorBody>(body) {
        return ClientError::Api {
            status,
            code: api_err.error.code,
            message: api_err.error.message.unwrap_or_default(),
        };
    }

    let text = String::from_utf8_lossy(body).into_owned();
    match status {
        StatusCode::NOT_FOUND => ClientError::NotFound(text),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ClientError::Validation(text),
        StatusCode::CONFLICT => ClientError::Conflict(text),
        _ => ClientError::Internal(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_empty_success_body_is_unit() {
        let unit: ClientResult<()> = decode(StatusCode::NO_CONTENT, b"");
        assert!(unit.is_ok());
    }

    #[test]
    fn test_structured_error() {
        let body = br#"{"error":{"code":"NOT_IN_QUEUE","message":"User is not in queue."}}"#;
        let err = decode::<()>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::NotInQueue));
        assert_eq!(err.message(), Some("User is not in queue."));
    }

    #[test]
    fn test_unrecognised_code() {
        let body = br#"{"error":{"code":"QUEUE_CLOSED"}}"#;
        let err = decode::<()>(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::Unknown));
        assert_eq!(err.message(), Some(""));
    }

    #[test]
    fn test_plain_text_error_falls_back_to_status() {
        let err = decode::<()>(StatusCode::NOT_FOUND, b"no route").unwrap_err();
        assert!(matches!(err, ClientError::NotFound(ref text) if text == "no route"));

        let err = decode::<()>(StatusCode::BAD_GATEWAY, b"").unwrap_err();
        assert!(matches!(err, ClientError::Internal(_)));
    }

    #[test]
    fn test_wrong_shape_is_invalid_response() {
        let err = decode::<Vec<u32>>(StatusCode::OK, br#"{"a":1}"#).unwrap_err();
        assert!(matches!(err, ClientError::InvalidResponse(_)));
    }
}
