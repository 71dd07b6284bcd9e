//! Server-sourced entities and request bodies.
//!
//! Every entity here is an immutable snapshot of what the backend returned;
//! identifiers are always issued server-side.

pub mod coordinates;
pub mod page;
pub mod user;
pub mod washery;

pub use coordinates::{Coordinates, CoordinatesError};
pub use page::{Page, PageRequest, DEFAULT_PAGE_SIZE};
pub use user::{ProfileUpdate, Session, User};
pub use washery::{Filter, ServiceOffering, Washery};
