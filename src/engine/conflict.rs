use ulid::Ulid;

use crate::model::{BookingRequest, Reservation, Span};

use super::BookingError;

/// Decide whether a proposed booking may join `existing`.
///
/// Rejects `InvalidRange` when the end is not after the start, then scans
/// reservations for the same tool with the half-open overlap test. `exclude`
/// lets an edit-in-place skip the record being replaced. When several
/// reservations collide, which one is reported is unspecified.
///
/// Pure decision function; the caller owns the collection and appends on Ok.
pub fn validate(
    request: &BookingRequest,
    existing: &[Reservation],
    exclude: Option<Ulid>,
) -> Result<(), BookingError> {
    if request.end <= request.start {
        return Err(BookingError::InvalidRange {
            start: request.start,
            end: request.end,
        });
    }
    let span = Span::new(request.start, request.end);

    for res in existing {
        if exclude == Some(res.id) || res.tool_id != request.tool_id {
            continue;
        }
        if res.span.overlaps(&span) {
            return Err(BookingError::Conflict(res.id));
        }
    }
    Ok(())
}
