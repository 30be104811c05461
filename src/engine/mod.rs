mod conflict;
mod error;
mod layout;

pub use conflict::validate;
pub use error::BookingError;
pub use layout::{Axis, Block, layout};
