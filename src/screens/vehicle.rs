//! Vehicle registration screen.
//!
//! The backend has no vehicle endpoint yet, so vehicles only live in this
//! controller for the lifetime of the process.

use super::login::capitalize;
use crate::state::{ScreenAction, ViewState};
use crate::utils::validation::require;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub plate: String,
    pub model: String,
    pub color: Option<String>,
}

#[derive(Debug, Default)]
pub struct VehicleScreen {
    vehicles: Vec<Vehicle>,
    state: ViewState<usize>,
}

impl VehicleScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// `Loaded` holds the number of vehicles registered so far.
    pub fn state(&self) -> &ViewState<usize> {
        &self.state
    }

    pub fn add(&mut self, plate: &str, model: &str, color: Option<&str>) -> ScreenAction {
        if let Err(e) = require("plate", plate).and_then(|()| require("model", model)) {
            self.state.fail(capitalize(&e.to_string()));
            return ScreenAction::None;
        }

        let plate = plate.trim().to_uppercase();
        if self.vehicles.iter().any(|v| v.plate == plate) {
            self.state
                .fail(format!("A vehicle with plate {} is already registered.", plate));
            return ScreenAction::None;
        }

        warn!("Vehicle {} kept locally; it is not sent to the server", plate);
        self.vehicles.push(Vehicle {
            plate: plate.clone(),
            model: model.trim().to_string(),
            color: color
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
        });
        self.state = ViewState::Loaded(self.vehicles.len());
        ScreenAction::message("Vehicles", format!("Vehicle {} added.", plate))
    }
}
