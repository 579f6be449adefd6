use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

pub type RoomId = Ulid;
pub type BookingId = Ulid;
pub type CustomerId = Ulid;

/// Inclusive calendar-date interval `[start, end]`.
///
/// Both endpoints are booked nights: a guest holding `[10th, 20th]` occupies
/// the room on the 10th and on the 20th, and a single-day stay has
/// `start == end`. A range with `start > end` is representable but rejected
/// by the engine before it reaches any predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Inclusive overlap: `[a, b]` and `[c, d]` overlap iff `a <= d && b >= c`.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every date in the range, ascending. Empty when `start > end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of occupied nights; 1 for a single-day range.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A unit of inventory. Created and removed by inventory management through
/// the store; the engine never mutates rooms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub description: String,
}

impl Room {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            description: description.into(),
        }
    }
}

/// A stay request, and once allocated, a confirmed reservation.
///
/// Two lifecycle states: unassigned (`room_id: None`, `active: false`, never
/// persisted by the engine) and confirmed (room assigned, `active: true`,
/// persisted). Only active bookings participate in overlap and occupancy
/// checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub room_id: Option<RoomId>,
    pub range: DateRange,
    pub active: bool,
    pub customer_id: CustomerId,
}

impl Booking {
    /// A candidate that has not been through allocation yet.
    pub fn request(range: DateRange, customer_id: CustomerId) -> Self {
        Self {
            id: Ulid::new(),
            room_id: None,
            range,
            active: false,
            customer_id,
        }
    }
}

/// Referenced by bookings as a foreign key; irrelevant to allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Ulid::new(),
            name: name.into(),
            email: email.into(),
        }
    }
}
