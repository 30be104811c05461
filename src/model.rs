use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Unix milliseconds — the only time type.
pub type Ms = i64;

/// One hour in [`Ms`].
pub const HOUR_MS: Ms = 3_600_000;

/// One day in [`Ms`].
pub const DAY_MS: Ms = 24 * HOUR_MS;

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Ms,
    pub end: Ms,
}

impl Span {
    pub fn new(start: Ms, end: Ms) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Ms) -> bool {
        self.start <= t && t < self.end
    }

    /// Overlapping part of `self` and `other`, or `None` when they only touch
    /// or are disjoint.
    pub fn intersect(&self, other: &Span) -> Option<Span> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then(|| Span::new(start, end))
    }
}

/// A booking of one tool by one user over a span of time.
///
/// Edits are full replacement by id; the per-tool no-overlap invariant is
/// enforced at validation time, never assumed by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Ulid,
    pub tool_id: Ulid,
    pub user_id: Ulid,
    pub span: Span,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Billing period for a tool subscription. Display metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

/// A bookable tool. Only `id` matters to the engine; everything else is
/// carried for the front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: Ulid,
    pub name: String,
    /// Render token (hex or HSL), opaque to the engine.
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_cycle: Option<BillingCycle>,
    /// Nature tag, e.g. "Text-to-Speech" or "Image Generation".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
}

impl Tool {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            name: name.into(),
            color: color.into(),
            description: None,
            price: None,
            billing_cycle: None,
            nature: None,
        }
    }
}

/// A team member who books tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Ulid,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    pub fn new(name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// A proposed booking before it has an id — what the booking form submits.
///
/// Endpoints are raw so an inverted or empty range is representable; it is
/// the validator's job to reject it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingRequest {
    pub tool_id: Ulid,
    pub start: Ms,
    pub end: Ms,
}
