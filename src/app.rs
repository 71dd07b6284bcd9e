use crate::api::{ApiClient, HttpBackend, ReqwestBackend, TransportError};
use crate::config::Config;
use crate::geolocation::{resolve_user_location, ConfiguredLocation};
use crate::models::Coordinates;
use crate::services::{AuthService, CatalogService, ProfileService, WasheryService};
use crate::session::{SessionHolder, SessionStore};
use anyhow::{Context, Result};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// The services a screen controller can call, all sharing one `ApiClient`
/// and therefore one session.
pub struct Services<B> {
    pub session: SessionHolder,
    pub washeries: WasheryService<B>,
    pub catalog: CatalogService<B>,
    pub auth: AuthService<B>,
    pub profile: ProfileService<B>,
}

impl<B: HttpBackend> Services<B> {
    pub fn new(backend: B, base_url: &str, session: SessionHolder) -> Result<Self, TransportError> {
        let api = Arc::new(ApiClient::new(backend, base_url, session.clone())?);
        Ok(Self {
            session,
            washeries: WasheryService::new(Arc::clone(&api)),
            catalog: CatalogService::new(Arc::clone(&api)),
            auth: AuthService::new(Arc::clone(&api)),
            profile: ProfileService::new(api),
        })
    }
}

/// Main application state: configuration, live services and the on-disk session.
pub struct App {
    config: Config,
    config_path: PathBuf,
    services: Services<ReqwestBackend>,
    session_store: SessionStore,
    http: Client,
}

impl App {
    /// Load configuration and any saved session from the default locations.
    /// `api_url` replaces the configured base URL for this run only.
    pub fn load(api_url: Option<String>) -> Result<Self> {
        let config_path = crate::utils::get_config_path();
        let mut config =
            Config::load_or_create(&config_path).context("Failed to load configuration")?;
        if let Some(url) = api_url {
            config.api.base_url = url;
        }
        let session_store = SessionStore::new(crate::utils::get_session_path());
        Self::from_parts(config, config_path, session_store)
    }

    pub fn from_parts(
        config: Config,
        config_path: PathBuf,
        session_store: SessionStore,
    ) -> Result<Self> {
        let session = match session_store.load()? {
            Some(saved) => {
                debug!("Restored session for user {}", saved.user_id);
                SessionHolder::with_session(saved)
            }
            None => SessionHolder::new(),
        };

        let timeout = config.api.timeout_secs.map(Duration::from_secs);
        let backend = ReqwestBackend::new(timeout).context("Failed to create HTTP client")?;
        let http = backend.client().clone();
        let services = Services::new(backend, &config.api.base_url, session)
            .with_context(|| format!("Invalid API base URL: {}", config.api.base_url))?;

        info!("Using API at {}", config.api.base_url);
        Ok(Self {
            config,
            config_path,
            services,
            session_store,
            http,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn services(&self) -> &Services<ReqwestBackend> {
        &self.services
    }

    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }

    pub fn page_size(&self) -> u32 {
        self.config.listing.page_size
    }

    /// Write the current session to disk, or remove the file after logout.
    pub fn persist_session(&self) -> Result<()> {
        match self.services.session.current() {
            Some(session) => self.session_store.save(Some(&session)),
            None => self.session_store.clear(),
        }
    }

    pub fn location_provider(&self, explicit: Option<Coordinates>) -> ConfiguredLocation {
        ConfiguredLocation::from_config(&self.config.location, self.http.clone(), explicit)
    }

    /// The user's location, or the fallback when it can't be determined.
    pub async fn resolve_location(&self, explicit: Option<Coordinates>) -> Coordinates {
        let provider = self.location_provider(explicit);
        let timeout = Duration::from_secs(self.config.location.timeout_secs);
        match resolve_user_location(&provider, timeout).await {
            Ok(coordinates) => coordinates,
            Err(never) => match never {},
        }
    }
}
