use crate::utils::error::{Result, SumError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.trim().is_empty() {
        return Err(SumError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SumError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SumError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// Empty paths are allowed here: they select stdin/stdout.
pub fn validate_optional_path(field_name: &str, path: Option<&str>) -> Result<()> {
    match path {
        Some(p) if p.contains('\0') => Err(SumError::InvalidConfigValue {
            field: field_name.to_string(),
            value: p.replace('\0', "\\0"),
            reason: "Path contains null bytes".to_string(),
        }),
        _ => Ok(()),
    }
}
