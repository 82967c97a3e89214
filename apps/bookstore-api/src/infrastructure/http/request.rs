//! HTTP request bodies.

use serde::{Deserialize, Serialize};

use crate::application::dto::CreateBookDto;

/// Request to create a book.
///
/// Both fields are required strings; anything else is a decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateBookRequest {
    /// Title.
    pub title: String,
    /// Author.
    pub author: String,
}

impl From<CreateBookRequest> for CreateBookDto {
    fn from(request: CreateBookRequest) -> Self {
        Self {
            title: request.title,
            author: request.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_complete_body() {
        let request: CreateBookRequest =
            serde_json::from_str(r#"{"title":"A","author":"B"}"#).unwrap();
        assert_eq!(request.title, "A");
        assert_eq!(request.author, "B");
    }

    #[test]
    fn rejects_missing_author() {
        assert!(serde_json::from_str::<CreateBookRequest>(r#"{"title":"A"}"#).is_err());
    }

    #[test]
    fn rejects_client_supplied_id() {
        let body = r#"{"id":"7","title":"A","author":"B"}"#;
        assert!(serde_json::from_str::<CreateBookRequest>(body).is_err());
    }
}
