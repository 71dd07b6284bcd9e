//! Washery detail screen controller.

use super::describe_error;
use crate::api::{HttpBackend, TransportError};
use crate::app::Services;
use crate::models::{ServiceOffering, Washery};
use crate::state::{ScreenAction, ScreenId, ViewState};

/// A washery together with the services it offers.
#[derive(Debug, Clone, PartialEq)]
pub struct WasheryDetail {
    pub washery: Washery,
    pub services: Vec<ServiceOffering>,
}

pub struct WasheryDetailScreen {
    id: i64,
    state: ViewState<WasheryDetail>,
}

impl WasheryDetailScreen {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            state: ViewState::Idle,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn state(&self) -> &ViewState<WasheryDetail> {
        &self.state
    }

    /// Fetch the washery, then its catalog. The two calls run one after the other.
    pub async fn load<B: HttpBackend>(&mut self, services: &Services<B>) -> ScreenAction {
        self.state.begin();
        let result = fetch_detail(services, self.id).await;
        let missing = matches!(&result, Err(e) if e.is_not_found());
        self.state.finish(result, |e| {
            if e.is_not_found() {
                "This washery no longer exists.".to_string()
            } else {
                describe_error(e)
            }
        });

        if missing {
            ScreenAction::Navigate(ScreenId::WasheryList)
        } else {
            ScreenAction::None
        }
    }
}

async fn fetch_detail<B: HttpBackend>(
    services: &Services<B>,
    id: i64,
) -> Result<WasheryDetail, TransportError> {
    let washery = services.washeries.get_by_id(id).await?;
    let offerings = services.catalog.list_for_washery(id).await?;
    Ok(WasheryDetail {
        washery,
        services: offerings,
    })
}
