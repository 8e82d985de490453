//! Reference Data Tables
//!
//! Immutable lookup tables loaded once at startup and read-only for the
//! process lifetime: airport coordinates, route distances and delay
//! groups, per-origin delay summaries, and airline name resolution.

mod airports;
mod carriers;
mod error;
mod routes;
mod summary;

pub use airports::AirportCoordinates;
pub use carriers::CarrierDirectory;
pub use error::{LookupError, TableError};
pub use routes::{delay_group, RouteDelayGroups, RouteDistances};
pub use summary::{OriginDelaySummary, OriginStats};
