//! Washery listing, search, filtering and lookup.

use super::to_body;
use crate::api::{ApiClient, HttpBackend, Query, TransportError};
use crate::models::{Coordinates, Filter, Page, PageRequest, Washery};
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, error};

/// Service for `/lava-jato` endpoints. None of them need authentication.
pub struct WasheryService<B> {
    api: Arc<ApiClient<B>>,
}

impl<B> Clone for WasheryService<B> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

impl<B: HttpBackend> WasheryService<B> {
    pub fn new(api: Arc<ApiClient<B>>) -> Self {
        Self { api }
    }

    /// List washeries, one page at a time.
    ///
    /// Sends `page`, `size`, and `sortBy` only when a sort key was given.
    pub async fn list(&self, request: &PageRequest) -> Result<Page<Washery>, TransportError> {
        let query = Query::new().paged_sorted(request);
        self.api
            .send_json(Method::GET, "/lava-jato", None, &query, false)
            .await
            .inspect_err(|e| error!("Failed to list washeries: {}", e))
    }

    /// Search by name.
    ///
    /// An empty name is forwarded unchanged; the server decides what it means.
    pub async fn search_by_name(
        &self,
        name: &str,
        request: &PageRequest,
    ) -> Result<Page<Washery>, TransportError> {
        let query = Query::new().push("nome", name).paged(request);
        self.api
            .send_json(Method::GET, "/lava-jato/buscar", None, &query, false)
            .await
            .inspect_err(|e| error!("Failed to search washeries for {:?}: {}", name, e))
    }

    /// Filter by rating and location.
    ///
    /// The criteria travel in the body and pagination in the query string;
    /// result ordering is left entirely to the server.
    pub async fn filter(
        &self,
        criteria: &Filter,
        request: &PageRequest,
    ) -> Result<Page<Washery>, TransportError> {
        let body = to_body(criteria)?;
        let query = Query::new().paged(request);
        self.api
            .send_json(Method::POST, "/lava-jato/filtrar", Some(body), &query, false)
            .await
            .inspect_err(|e| error!("Failed to filter washeries: {}", e))
    }

    /// Washeries near a point. Unpaginated: the result can be any size.
    pub async fn nearby(
        &self,
        coordinates: Coordinates,
        radius: Option<f64>,
    ) -> Result<Vec<Washery>, TransportError> {
        let query = Query::new()
            .push("latLong", coordinates)
            .push_opt("raio", radius);
        let washeries: Vec<Washery> = self
            .api
            .send_json(Method::GET, "/lava-jato/proximos", None, &query, false)
            .await
            .inspect_err(|e| error!("Failed to fetch washeries near {}: {}", coordinates, e))?;
        debug!("{} washeries near {}", washeries.len(), coordinates);
        Ok(washeries)
    }

    /// Fetch one washery. A missing id surfaces as a 404 `TransportError`.
    pub async fn get_by_id(&self, id: i64) -> Result<Washery, TransportError> {
        self.api
            .send_json(
                Method::GET,
                &format!("/lava-jato/{}", id),
                None,
                &Query::new(),
                false,
            )
            .await
            .inspect_err(|e| error!("Failed to fetch washery {}: {}", id, e))
    }

    /// Backend health check (plain text body).
    pub async fn health(&self) -> Result<String, TransportError> {
        self.api
            .send_text(Method::GET, "/lava-jato/health", &Query::new(), false)
            .await
            .inspect_err(|e| error!("Health check failed: {}", e))
    }
}
