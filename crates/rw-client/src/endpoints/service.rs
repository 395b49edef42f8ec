//! Service health and banner endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use rw_core::{Endpoint, Result};
use rw_models::{HealthStatus, ServiceInfo};
use std::sync::Arc;
use tracing::instrument;

/// Health and banner endpoints
pub struct ServiceEndpoints {
    transport: Arc<Transport>,
}

impl ServiceEndpoints {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// `GET /health`
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus> {
        self.transport().get(Endpoint::Health, &[]).await
    }

    /// `GET /`, the service name and version
    #[instrument(skip(self))]
    pub async fn info(&self) -> Result<ServiceInfo> {
        self.transport().get(Endpoint::Root, &[]).await
    }
}

impl_endpoint_base!(ServiceEndpoints);
