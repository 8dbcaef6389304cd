use crate::utils::error::{Result, SumError};
use std::collections::HashMap;
use std::path::Path;

pub const HTTP_URL_KEY: &str = "http_url";
pub const DEFAULT_HTTP_URL: &str = "https://example.com";
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Values resolved once at startup and handed to the components that need them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub http_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_url: DEFAULT_HTTP_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads the dotenv file (explicit path, or `./.env`) and layers the
    /// process environment on top.
    pub fn load(env_file: Option<&Path>) -> Result<Self> {
        let file_vars = read_env_file(env_file)?;
        Ok(Self::resolve(|key| std::env::var(key).ok(), &file_vars))
    }

    /// Precedence: process environment, then dotenv file, then default.
    /// Keys are looked up upper-cased first, then as written. Empty values
    /// count as unset.
    pub fn resolve<F>(process_env: F, file_vars: &HashMap<String, String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_url = lookup(HTTP_URL_KEY, &process_env)
            .or_else(|| lookup(HTTP_URL_KEY, |key| file_vars.get(key).cloned()))
            .unwrap_or_else(|| DEFAULT_HTTP_URL.to_string());

        Self { http_url }
    }
}

fn lookup<F>(key: &str, source: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    [key.to_uppercase(), key.to_string()]
        .iter()
        .filter_map(|name| source(name))
        .find(|value| !value.is_empty())
}

/// Parses the dotenv file into a map without touching the process
/// environment. An explicit file must load; the default `./.env` is optional.
pub fn read_env_file(path: Option<&Path>) -> Result<HashMap<String, String>> {
    match path {
        Some(path) => parse_env_file(path).map_err(|source| SumError::EnvFile {
            path: path.display().to_string(),
            source,
        }),
        None => Ok(read_optional_env_file(Path::new(DEFAULT_ENV_FILE))),
    }
}

/// Any open or parse failure falls back to an empty map.
pub fn read_optional_env_file(path: &Path) -> HashMap<String, String> {
    match parse_env_file(path) {
        Ok(vars) => vars,
        Err(e) => {
            tracing::debug!("Skipping {}: {}", path.display(), e);
            tracing::info!("No .env file found, using default values.");
            HashMap::new()
        }
    }
}

fn parse_env_file(path: &Path) -> std::result::Result<HashMap<String, String>, dotenvy::Error> {
    let vars = dotenvy::from_path_iter(path)?.collect::<std::result::Result<HashMap<_, _>, _>>()?;
    tracing::debug!("Loaded {} variables from {}", vars.len(), path.display());
    Ok(vars)
}
