//! Shared-tool reservation engine: conflict validation and calendar layout.
//!
//! Two pure functions form the contract with any front end:
//! [`engine::validate`] decides whether a proposed booking may join the
//! reservation set (same-tool overlaps are rejected, half-open, touching
//! endpoints allowed), and [`engine::layout`] projects reservations onto
//! day/week/month window geometry as positioned blocks.
//!
//! [`store::Store`] owns the user/tool/reservation collections and routes
//! every mutation through validation; [`snapshot`] persists them as JSON on
//! an explicit save, seeding defaults from [`seed`] on first run.

pub mod engine;
pub mod model;
pub mod seed;
pub mod snapshot;
pub mod store;
pub mod window;

pub use engine::{Axis, Block, BookingError, layout, validate};
pub use model::{BookingRequest, Ms, Reservation, Span, Tool, User};
pub use store::Store;
pub use window::{TimeWindow, ViewMode};
