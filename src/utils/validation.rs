use crate::utils::error::{PortfolioError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(PortfolioError::validation(field_name, "URL cannot be empty"));
    }

    match Url::parse(url_str.trim()) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PortfolioError::validation(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(PortfolioError::validation(
            field_name,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PortfolioError::validation(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(PortfolioError::validation(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_positive_id(field_name: &str, value: i64) -> Result<()> {
    if value < 1 {
        return Err(PortfolioError::validation(
            field_name,
            format!("Value must be a positive integer, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| PortfolioError::validation(field_name, "Field is required"))
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("url", "https://example.com").is_ok());
        assert!(validate_url("url", "http://x").is_ok());
        assert!(validate_url("url", "").is_err());
        assert!(validate_url("url", "not a url").is_err());
        assert!(validate_url("url", "javascript:alert(1)").is_err());
    }

    #[test]
    fn test_validate_positive_id() {
        assert!(validate_positive_id("id", 1).is_ok());
        assert!(validate_positive_id("id", 0).is_err());
        assert!(validate_positive_id("id", -4).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("title", "Rust").is_ok());
        assert!(validate_non_empty_string("title", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3);
        let absent: Option<i32> = None;
        assert_eq!(*validate_required_field("id", &present).unwrap(), 3);
        assert!(validate_required_field("id", &absent).is_err());
    }
}
