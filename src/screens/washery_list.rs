//! Washery list screen controller: plain listing, name search, filtering and
//! nearby search, with page navigation for the paginated modes.

use super::describe_error;
use crate::api::{HttpBackend, TransportError};
use crate::app::Services;
use crate::models::{Coordinates, Filter, Page, PageRequest, Washery};
use crate::state::{ScreenAction, ScreenId, ViewState};
use tracing::debug;

/// Which query the list is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ListingMode {
    All { sort_by: Option<String> },
    Search(String),
    Filter(Filter),
    Nearby {
        coordinates: Coordinates,
        radius: Option<f64>,
    },
}

/// What the last successful load returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Paged(Page<Washery>),
    /// Nearby results come back as one unbounded list.
    Unpaged(Vec<Washery>),
}

impl Listing {
    pub fn items(&self) -> &[Washery] {
        match self {
            Self::Paged(page) => &page.content,
            Self::Unpaged(items) => items,
        }
    }

    pub fn page(&self) -> Option<&Page<Washery>> {
        match self {
            Self::Paged(page) => Some(page),
            Self::Unpaged(_) => None,
        }
    }
}

pub struct WasheryListScreen {
    mode: ListingMode,
    request: PageRequest,
    state: ViewState<Listing>,
}

impl WasheryListScreen {
    pub fn new(page_size: u32) -> Self {
        Self {
            mode: ListingMode::All { sort_by: None },
            request: PageRequest::new(0, page_size),
            state: ViewState::Idle,
        }
    }

    pub fn mode(&self) -> &ListingMode {
        &self.mode
    }

    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn state(&self) -> &ViewState<Listing> {
        &self.state
    }

    /// Switch to `mode`, starting again from page `page`.
    pub fn set_mode(&mut self, mode: ListingMode, page: u32) {
        self.request.page = page;
        self.request.sort_by = match &mode {
            ListingMode::All { sort_by } => sort_by.clone(),
            _ => None,
        };
        self.mode = mode;
        self.state.reset();
    }

    /// Load the current mode and page.
    pub async fn load<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        self.state.begin();
        let washeries = &services.washeries;
        let result: Result<Listing, TransportError> = match &self.mode {
            ListingMode::All { .. } => washeries.list(&self.request).await.map(Listing::Paged),
            ListingMode::Search(name) => washeries
                .search_by_name(name, &self.request)
                .await
                .map(Listing::Paged),
            ListingMode::Filter(filter) => washeries
                .filter(filter, &self.request)
                .await
                .map(Listing::Paged),
            ListingMode::Nearby {
                coordinates,
                radius,
            } => washeries
                .nearby(*coordinates, *radius)
                .await
                .map(Listing::Unpaged),
        };

        if let Ok(Listing::Paged(page)) = &result {
            if !page.is_consistent() {
                debug!(
                    "Server page {} of {} holds {} items for size {}",
                    page.number,
                    page.total_pages,
                    page.content.len(),
                    page.size
                );
            }
        }

        self.state.finish(result, describe_error);
        ScreenAction::None
    }

    /// Load the next page, if the current one says there is one.
    pub async fn next_page<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        let has_next = self
            .state
            .loaded()
            .and_then(Listing::page)
            .is_some_and(Page::has_next);
        if !has_next {
            return ScreenAction::message("Washeries", "Already on the last page.");
        }
        self.request = self.request.next();
        self.load(services).await
    }

    pub async fn previous_page<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        let has_previous = self
            .state
            .loaded()
            .and_then(Listing::page)
            .is_some_and(Page::has_previous);
        if !has_previous {
            return ScreenAction::message("Washeries", "Already on the first page.");
        }
        self.request = self.request.previous();
        self.load(services).await
    }

    /// Open the washery at `index` in the shown list.
    pub fn open(&self, index: usize) -> ScreenAction {
        match self.state.loaded().and_then(|l| l.items().get(index)) {
            Some(washery) => ScreenAction::Navigate(ScreenId::WasheryDetail(washery.id)),
            None => ScreenAction::None,
        }
    }
}
