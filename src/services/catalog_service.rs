//! Per-washery service catalog.

use crate::api::{ApiClient, HttpBackend, Query, TransportError};
use crate::models::ServiceOffering;
use reqwest::Method;
use std::sync::Arc;
use tracing::error;

/// Service for `/servicos` endpoints.
pub struct CatalogService<B> {
    api: Arc<ApiClient<B>>,
}

impl<B> Clone for CatalogService<B> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<B: HttpBackend> CatalogService<B> {
    pub fn new(api: Arc<ApiClient<B>>) -> Self {
        Self { api }
    }

    /// Every service a washery offers.
    pub async fn list_for_washery(
        &self,
        washery_id: i64,
    ) -> Result<Vec<ServiceOffering>, TransportError> {
        self.api
            .send_json(
                Method::GET,
                &format!("/servicos/lavajato/{}", washery_id),
                None,
                &Query::new(),
                false,
            )
            .await
            .inspect_err(|e| error!("Failed to fetch services of washery {}: {}", washery_id, e))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<ServiceOffering, TransportError> {
        self.api
            .send_json(
                Method::GET,
                &format!("/servicos/{}", id),
                None,
                &Query::new(),
                false,
            )
            .await
            .inspect_err(|e| error!("Failed to fetch service {}: {}", id, e))
    }
}
