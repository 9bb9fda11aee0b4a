use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Validation error on '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("Project with id {id} already exists")]
    DuplicateId { id: i64 },

    #[error("Portfolio has not been initialized")]
    NotInitialized,

    #[error("Required page element '#{id}' is missing")]
    MissingElement { id: String },

    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Nothing stored under key '{key}'")]
    NotFound { key: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Seed file error: {0}")]
    SeedError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Conflict,
    State,
    Page,
    Storage,
}

impl PortfolioError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation { .. } | Self::SeedError(_) => ErrorCategory::Input,
            Self::DuplicateId { .. } => ErrorCategory::Conflict,
            Self::NotInitialized => ErrorCategory::State,
            Self::MissingElement { .. } => ErrorCategory::Page,
            Self::Persistence { .. }
            | Self::NotFound { .. }
            | Self::IoError(_)
            | Self::SerializationError(_) => ErrorCategory::Storage,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation { field, reason } => format!("Invalid {}: {}", field, reason),
            Self::DuplicateId { id } => format!("A project with id {} is already listed", id),
            Self::NotInitialized => "The portfolio is not loaded yet".to_string(),
            Self::MissingElement { id } => {
                format!("The page is missing the '{}' section", id)
            }
            Self::SeedError(e) => format!("The seed file could not be read: {}", e),
            _ => format!("Your changes could not be stored ({})", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert_eq!(
            PortfolioError::validation("title", "empty").category(),
            ErrorCategory::Input
        );
        assert_eq!(
            PortfolioError::DuplicateId { id: 3 }.category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            PortfolioError::NotFound {
                key: "k".to_string()
            }
            .category(),
            ErrorCategory::Storage
        );
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = PortfolioError::validation("name", "Value cannot be empty");
        assert!(err.user_friendly_message().contains("name"));
    }
}
