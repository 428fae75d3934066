//! Event aggregate and attendance-derived views.
//!
//! ## Invariants
//! - `title`, `description`, and `venue` are non-empty after trimming.
//! - `capacity` is between 1 and [`MAX_CAPACITY`] inclusive.
//!
//! Seats-left figures are always derived from a registration count taken at
//! read time; they are never stored.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

/// Upper bound on event capacity.
///
/// Keeps the figure comfortably inside the storage layer's 32-bit integer
/// column while ruling out nonsense input.
pub const MAX_CAPACITY: u32 = 1_000_000;

/// Validation failures raised when constructing an [`Event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EventValidationError {
    /// Title is empty after trimming.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Description is empty after trimming.
    #[error("description must not be empty")]
    EmptyDescription,
    /// Venue is empty after trimming.
    #[error("venue must not be empty")]
    EmptyVenue,
    /// Capacity is zero or exceeds [`MAX_CAPACITY`].
    #[error("capacity must be between 1 and {MAX_CAPACITY}")]
    CapacityOutOfRange,
}

impl EventValidationError {
    /// Name of the offending field, for structured error details.
    pub const fn field(self) -> &'static str {
        match self {
            Self::EmptyTitle => "title",
            Self::EmptyDescription => "description",
            Self::EmptyVenue => "venue",
            Self::CapacityOutOfRange => "capacity",
        }
    }
}

/// Unvalidated event fields accepted from adapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub capacity: u32,
}

/// A scheduled event with a fixed attendance capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: Uuid,
    title: String,
    description: String,
    event_date: NaiveDate,
    event_time: NaiveTime,
    venue: String,
    capacity: u32,
}

impl Event {
    /// Validate a draft into an event.
    ///
    /// Text fields are stored trimmed.
    pub fn new(draft: EventDraft) -> Result<Self, EventValidationError> {
        let EventDraft {
            id,
            title,
            description,
            event_date,
            event_time,
            venue,
            capacity,
        } = draft;

        let title = title.trim().to_owned();
        if title.is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        let description = description.trim().to_owned();
        if description.is_empty() {
            return Err(EventValidationError::EmptyDescription);
        }
        let venue = venue.trim().to_owned();
        if venue.is_empty() {
            return Err(EventValidationError::EmptyVenue);
        }
        if capacity == 0 || capacity > MAX_CAPACITY {
            return Err(EventValidationError::CapacityOutOfRange);
        }

        Ok(Self {
            id,
            title,
            description,
            event_date,
            event_time,
            venue,
            capacity,
        })
    }

    /// Stable event identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Event title shown in listings.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Longer event description.
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Calendar date of the event.
    pub const fn event_date(&self) -> NaiveDate {
        self.event_date
    }

    /// Start time of the event.
    pub const fn event_time(&self) -> NaiveTime {
        self.event_time
    }

    /// Venue the event takes place at.
    pub fn venue(&self) -> &str {
        self.venue.as_str()
    }

    /// Maximum number of registrations the event admits.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }
}

/// An event together with its registration count taken at read time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    event: Event,
    registered_count: u32,
}

impl EventSummary {
    /// Pair an event with the registration count observed for it.
    pub const fn new(event: Event, registered_count: u32) -> Self {
        Self {
            event,
            registered_count,
        }
    }

    /// The underlying event.
    pub const fn event(&self) -> &Event {
        &self.event
    }

    /// Registrations recorded when this summary was read.
    pub const fn registered_count(&self) -> u32 {
        self.registered_count
    }

    /// Remaining seats, saturating at zero when over-subscribed data is read.
    pub const fn seats_left(&self) -> u32 {
        self.event.capacity().saturating_sub(self.registered_count)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use rstest::rstest;

    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            id: Uuid::new_v4(),
            title: "Tech Talk".to_owned(),
            description: "An evening of lightning talks.".to_owned(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
            event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
            venue: "Main Auditorium".to_owned(),
            capacity: 120,
        }
    }

    #[test]
    fn valid_draft_is_accepted_and_trimmed() {
        let mut input = draft();
        input.title = "  Tech Talk  ".to_owned();
        input.venue = " Main Auditorium ".to_owned();

        let event = Event::new(input).expect("valid event");
        assert_eq!(event.title(), "Tech Talk");
        assert_eq!(event.venue(), "Main Auditorium");
        assert_eq!(event.capacity(), 120);
    }

    #[rstest]
    #[case("title", EventValidationError::EmptyTitle)]
    #[case("description", EventValidationError::EmptyDescription)]
    #[case("venue", EventValidationError::EmptyVenue)]
    fn blank_text_fields_are_rejected(
        #[case] field: &str,
        #[case] expected: EventValidationError,
    ) {
        let mut input = draft();
        match field {
            "title" => input.title = "   ".to_owned(),
            "description" => input.description = String::new(),
            _ => input.venue = "\t".to_owned(),
        }

        let error = Event::new(input).expect_err("blank field should fail");
        assert_eq!(error, expected);
        assert_eq!(error.field(), field);
    }

    #[rstest]
    #[case(0)]
    #[case(MAX_CAPACITY + 1)]
    fn out_of_range_capacity_is_rejected(#[case] capacity: u32) {
        let mut input = draft();
        input.capacity = capacity;

        let error = Event::new(input).expect_err("capacity should fail");
        assert_eq!(error, EventValidationError::CapacityOutOfRange);
    }

    #[rstest]
    #[case(0, 120)]
    #[case(119, 1)]
    #[case(120, 0)]
    #[case(121, 0)]
    fn seats_left_saturates(#[case] registered: u32, #[case] expected: u32) {
        let summary = EventSummary::new(Event::new(draft()).expect("valid event"), registered);
        assert_eq!(summary.seats_left(), expected);
    }
}
