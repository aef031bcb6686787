use crate::utils::error::{PortfolioError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_bind_address(field_name: &str, host: &str, port: u16) -> Result<SocketAddr> {
    validate_non_empty_string(field_name, host)?;

    let candidate = if host.contains(':') && !host.starts_with('[') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    };
    candidate
        .parse::<SocketAddr>()
        .map_err(|e| PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: candidate.clone(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PortfolioError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_bind_address() {
        assert!(validate_bind_address("server", "0.0.0.0", 5000).is_ok());
        assert!(validate_bind_address("server", "127.0.0.1", 0).is_ok());
        assert!(validate_bind_address("server", "::1", 8080).is_ok());
        assert!(validate_bind_address("server", "", 5000).is_err());
        assert!(validate_bind_address("server", "not a host", 5000).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("host", "localhost").is_ok());
        assert!(validate_non_empty_string("host", "   ").is_err());
    }
}
