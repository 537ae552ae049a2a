use crate::utils::error::{FightError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(FightError::ConfigError {
            message: format!("{}: URL cannot be empty", field_name),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(FightError::ConfigError {
                message: format!("{}: unsupported URL scheme: {}", field_name, scheme),
            }),
        },
        Err(e) => Err(FightError::ConfigError {
            message: format!("{}: invalid URL '{}': {}", field_name, url_str, e),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FightError::ConfigError {
            message: format!(
                "{}: value {} must be between {} and {}",
                field_name, value, min, max
            ),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FightError::ValidationError {
            message: format!("{} cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("hero_service_url", "https://example.com").is_ok());
        assert!(validate_url("hero_service_url", "http://localhost:8083").is_ok());
        assert!(validate_url("hero_service_url", "").is_err());
        assert!(validate_url("hero_service_url", "not-a-url").is_err());
        assert!(validate_url("hero_service_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("request_timeout_millis", 500u64, 1, 60_000).is_ok());
        assert!(validate_range("request_timeout_millis", 0u64, 1, 60_000).is_err());
        assert!(validate_range("request_timeout_millis", 120_000u64, 1, 60_000).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Chewbacca").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
