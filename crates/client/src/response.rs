use serde::Deserialize;

/// Rejection body shape the endpoint returns: an array of error objects,
/// each carrying at least a message. Only the first one is surfaced.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    message: String,
}

/// First structured error message of a rejection body, when the shape holds.
/// A malformed or empty body yields None and the caller falls back to the
/// generic failure message.
pub fn first_error_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.errors.into_iter().next().map(|entry| entry.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_is_surfaced() {
        let body = r#"{"errors":[{"message":"Email já cadastrado"},{"message":"CPF já cadastrado"}]}"#;
        assert_eq!(
            first_error_message(body),
            Some("Email já cadastrado".to_string())
        );
    }

    #[test]
    fn test_extra_fields_are_tolerated() {
        let body = r#"{"errors":[{"message":"Email já cadastrado","field":"email","code":409}]}"#;
        assert_eq!(
            first_error_message(body),
            Some("Email já cadastrado".to_string())
        );
    }

    #[test]
    fn test_empty_error_list_yields_none() {
        assert_eq!(first_error_message(r#"{"errors":[]}"#), None);
    }

    #[test]
    fn test_malformed_body_yields_none() {
        assert_eq!(first_error_message("<html>502 Bad Gateway</html>"), None);
        assert_eq!(first_error_message(""), None);
        assert_eq!(first_error_message(r#"{"error":"nope"}"#), None);
    }
}
