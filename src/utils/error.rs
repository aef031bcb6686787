use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Industry not found: {id}")]
    IndustryNotFound { id: String },

    #[error("Category not found: {id}")]
    CategoryNotFound { id: String },

    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    #[error("Invalid project id: {id}")]
    InvalidProjectId { id: String },

    #[error("Invalid project index in {id}")]
    InvalidProjectIndex { id: String },

    #[error("Failed to read {path}: {source}")]
    SourceReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    SourceParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，對應 API 的錯誤語意
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidArgument,
    SourceRead,
    Config,
    Internal,
}

impl PortfolioError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PortfolioError::IndustryNotFound { .. }
            | PortfolioError::CategoryNotFound { .. }
            | PortfolioError::ProjectNotFound { .. } => ErrorKind::NotFound,
            PortfolioError::InvalidProjectId { .. } | PortfolioError::InvalidProjectIndex { .. } => {
                ErrorKind::InvalidArgument
            }
            PortfolioError::SourceReadError { .. } | PortfolioError::SourceParseError { .. } => {
                ErrorKind::SourceRead
            }
            PortfolioError::ConfigError { .. }
            | PortfolioError::ConfigValidationError { .. }
            | PortfolioError::InvalidConfigValueError { .. } => ErrorKind::Config,
            PortfolioError::IoError(_) | PortfolioError::TemplateError(_) => ErrorKind::Internal,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidArgument => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 回傳給客戶端的訊息，不含內部細節
    pub fn client_message(&self) -> &'static str {
        match self {
            PortfolioError::IndustryNotFound { .. } => "Industry not found",
            PortfolioError::CategoryNotFound { .. } => "Category not found",
            PortfolioError::ProjectNotFound { .. } => "Project not found",
            PortfolioError::InvalidProjectId { .. } => "Invalid project id",
            PortfolioError::InvalidProjectIndex { .. } => "Invalid project index",
            _ => "Internal server error",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.kind() {
            ErrorKind::Config => format!("Invalid configuration. {}", self),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for PortfolioError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "lookup rejected");
        }

        let body = Json(serde_json::json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_map_to_client_statuses() {
        let not_found = PortfolioError::CategoryNotFound {
            id: "nope".to_string(),
        };
        assert_eq!(not_found.kind(), ErrorKind::NotFound);
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(not_found.client_message(), "Category not found");

        let bad_index = PortfolioError::InvalidProjectIndex {
            id: "cat-x".to_string(),
        };
        assert_eq!(bad_index.kind(), ErrorKind::InvalidArgument);
        assert_eq!(bad_index.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(bad_index.client_message(), "Invalid project index");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = PortfolioError::ConfigError {
            message: "secret path /etc/thing".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.client_message(), "Internal server error");
        assert!(err.user_friendly_message().contains("/etc/thing"));
    }
}
