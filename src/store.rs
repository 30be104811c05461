use serde::{Deserialize, Serialize};
use tracing::debug;
use ulid::Ulid;

use crate::engine::{BookingError, validate};
use crate::model::{BookingRequest, Reservation, Span, Tool, User};

/// Owner of the three collections.
///
/// Every reservation mutation goes through [`validate`], so the per-tool
/// no-overlap invariant holds for everything stored here. Persistence is
/// explicit: the owner decides when to call [`crate::snapshot::save`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub users: Vec<User>,
    pub tools: Vec<Tool>,
    pub reservations: Vec<Reservation>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Book a tool for a user. On acceptance a fresh id is minted and the
    /// reservation is appended, preserving creation order for the layout.
    pub fn book(
        &mut self,
        request: BookingRequest,
        user_id: Ulid,
        notes: Option<String>,
    ) -> Result<Ulid, BookingError> {
        validate(&request, &self.reservations, None)?;
        let id = Ulid::new();
        self.reservations.push(Reservation {
            id,
            tool_id: request.tool_id,
            user_id,
            span: Span::new(request.start, request.end),
            notes,
        });
        debug!("booked {} on tool {}", id, request.tool_id);
        Ok(id)
    }

    /// Edit = full replacement by id. The stored record is excluded from
    /// conflict checking so an unchanged edit never self-conflicts; its slot
    /// in the collection is reused so stacking order stays put.
    pub fn reschedule(
        &mut self,
        id: Ulid,
        request: BookingRequest,
        user_id: Ulid,
        notes: Option<String>,
    ) -> Result<(), BookingError> {
        let pos = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(BookingError::NotFound(id))?;
        validate(&request, &self.reservations, Some(id))?;
        self.reservations[pos] = Reservation {
            id,
            tool_id: request.tool_id,
            user_id,
            span: Span::new(request.start, request.end),
            notes,
        };
        debug!("rescheduled {} on tool {}", id, request.tool_id);
        Ok(())
    }

    pub fn cancel(&mut self, id: Ulid) -> Result<Reservation, BookingError> {
        let pos = self
            .reservations
            .iter()
            .position(|r| r.id == id)
            .ok_or(BookingError::NotFound(id))?;
        debug!("cancelled {}", id);
        Ok(self.reservations.remove(pos))
    }

    pub fn add_tool(&mut self, tool: Tool) {
        self.tools.push(tool);
    }

    /// Remove a tool and cascade-delete every reservation referencing it.
    /// Returns how many reservations went with it. Any confirmation prompt
    /// belongs to the caller.
    pub fn remove_tool(&mut self, id: Ulid) -> Result<usize, BookingError> {
        let pos = self
            .tools
            .iter()
            .position(|t| t.id == id)
            .ok_or(BookingError::NotFound(id))?;
        self.tools.remove(pos);
        let before = self.reservations.len();
        self.reservations.retain(|r| r.tool_id != id);
        let removed = before - self.reservations.len();
        debug!("removed tool {} and {} of its reservations", id, removed);
        Ok(removed)
    }

    pub fn add_user(&mut self, user: User) {
        self.users.push(user);
    }

    pub fn tool(&self, id: Ulid) -> Option<&Tool> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn user(&self, id: Ulid) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn reservation(&self, id: Ulid) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }
}
