use chrono::NaiveDate;

use crate::model::{Booking, DateRange, Room, RoomId};

use super::conflict::has_conflict;

// ── Allocation Algorithm ──────────────────────────────────────────

/// First room with no overlapping active booking, lowest id first.
///
/// Candidates are sorted here rather than trusting store order, so repeated
/// calls over unchanged data always pick the same room. `None` means every
/// room conflicts — a normal outcome, not a fault.
pub fn first_free_room(rooms: &[Room], bookings: &[Booking], range: &DateRange) -> Option<RoomId> {
    let mut candidates: Vec<RoomId> = rooms.iter().map(|r| r.id).collect();
    candidates.sort_unstable();
    candidates
        .into_iter()
        .find(|room| !has_conflict(bookings, *room, range))
}

/// Dates in `range` (ascending) on which every room carries an active
/// booking. With no rooms there is nothing to occupy, so the answer is
/// empty.
///
/// Brute force over days × rooms × bookings. Windows are short and
/// inventories small; an interval index would have to reproduce this output
/// exactly anyway.
pub fn fully_occupied_dates(
    rooms: &[Room],
    bookings: &[Booking],
    range: &DateRange,
) -> Vec<NaiveDate> {
    if rooms.is_empty() {
        return Vec::new();
    }
    range
        .days()
        .filter(|day| {
            rooms.iter().all(|room| {
                bookings
                    .iter()
                    .any(|b| b.active && b.room_id == Some(room.id) && b.range.contains(*day))
            })
        })
        .collect()
}
