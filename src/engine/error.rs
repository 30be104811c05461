use ulid::Ulid;

use crate::model::Ms;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// End does not come after start.
    InvalidRange { start: Ms, end: Ms },
    /// An overlapping reservation exists for the same tool.
    Conflict(Ulid),
    /// No reservation or tool with this id.
    NotFound(Ulid),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::InvalidRange { start, end } => {
                write!(f, "invalid range: end {end} not after start {start}")
            }
            BookingError::Conflict(id) => write!(f, "conflicts with reservation: {id}"),
            BookingError::NotFound(id) => write!(f, "not found: {id}"),
        }
    }
}

impl std::error::Error for BookingError {}
