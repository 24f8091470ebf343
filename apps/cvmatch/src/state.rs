use std::sync::Arc;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::errors::AppError;
use crate::matching::{FallbackMatcher, JobMatcher};

/// Shared state handed to every command handler.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub config: Config,
    /// Used only when the backend returns no match data. Default: FallbackMatcher.
    pub matcher: Arc<dyn JobMatcher>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            api: Arc::new(ApiClient::new(&config)),
            config,
            matcher: Arc::new(FallbackMatcher::default()),
        }
    }

    /// Admin commands are gated on a configuration flag; there is no real login.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.config.admin {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(admin: &'static str) -> AppState {
        let config = Config::from_lookup(|key| (key == "CVMATCH_ADMIN").then(|| admin.to_string()))
            .unwrap();
        AppState::new(config)
    }

    #[test]
    fn test_admin_gate() {
        assert!(state_with("true").require_admin().is_ok());
        assert!(matches!(
            state_with("false").require_admin(),
            Err(AppError::Forbidden)
        ));
    }
}
