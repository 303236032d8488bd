//! Shared handler state
//!
//! One `AppState` is built at startup and cloned into every handler by
//! axum. Both halves sit behind `Arc`, so the clone is two pointer bumps.

use std::sync::Arc;

use qna_common::{AppConfig, JwtService};
use qna_service::ServiceContext;

/// Everything a handler needs: the wired service layer plus config
#[derive(Clone, Debug)]
pub struct AppState {
    service_context: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
        }
    }

    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Shortcut for the auth extractors, which only need token validation
    pub fn jwt_service(&self) -> &JwtService {
        self.service_context.jwt_service()
    }
}
