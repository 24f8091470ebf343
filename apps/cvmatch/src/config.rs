use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Client configuration loaded from environment variables.
/// Every value has a default, so an empty environment talks to a local backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub candidates_url: String,
    pub jobs_url: String,
    pub job_matches_url: String,
    /// Pause between a successful upload and showing the results.
    pub navigation_delay: Duration,
    /// Stand-in for real authentication: gates the `admin` commands.
    pub admin: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_url = lookup("CVMATCH_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = api_url.trim_end_matches('/');

        let navigation_delay_ms = match lookup("NAVIGATION_DELAY_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("NAVIGATION_DELAY_MS must be a whole number of milliseconds")?,
            None => 1000,
        };

        let admin = match lookup("CVMATCH_ADMIN") {
            Some(raw) => parse_flag(&raw)
                .with_context(|| format!("CVMATCH_ADMIN must be true or false, got '{raw}'"))?,
            None => true,
        };

        Ok(Config {
            candidates_url: endpoint(&lookup, "CANDIDATES_URL", api_url, "api/candidates"),
            jobs_url: endpoint(&lookup, "JOBS_URL", api_url, "api/jobs"),
            job_matches_url: endpoint(&lookup, "JOB_MATCHES_URL", api_url, "api/job-matches"),
            navigation_delay: Duration::from_millis(navigation_delay_ms),
            admin,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn endpoint(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    api_url: &str,
    path: &str,
) -> String {
    lookup(key)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_else(|| format!("{api_url}/{path}"))
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_point_at_local_backend() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.candidates_url, "http://localhost:8080/api/candidates");
        assert_eq!(config.jobs_url, "http://localhost:8080/api/jobs");
        assert_eq!(config.job_matches_url, "http://localhost:8080/api/job-matches");
        assert_eq!(config.navigation_delay, Duration::from_secs(1));
        assert!(config.admin);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let config = config_from(&[("CVMATCH_API_URL", "https://cv.example.com/")]).unwrap();
        assert_eq!(config.jobs_url, "https://cv.example.com/api/jobs");
    }

    #[test]
    fn test_explicit_endpoint_overrides_base() {
        let config = config_from(&[
            ("CVMATCH_API_URL", "https://cv.example.com"),
            ("JOBS_URL", "https://jobs.example.com/v2/jobs/"),
        ])
        .unwrap();
        assert_eq!(config.jobs_url, "https://jobs.example.com/v2/jobs");
        assert_eq!(config.candidates_url, "https://cv.example.com/api/candidates");
    }

    #[test]
    fn test_admin_flag_parsing() {
        assert!(!config_from(&[("CVMATCH_ADMIN", "false")]).unwrap().admin);
        assert!(config_from(&[("CVMATCH_ADMIN", "YES")]).unwrap().admin);
        assert!(config_from(&[("CVMATCH_ADMIN", "maybe")]).is_err());
    }

    #[test]
    fn test_invalid_delay_is_an_error() {
        let err = config_from(&[("NAVIGATION_DELAY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("NAVIGATION_DELAY_MS"));
    }
}
