use chrono::{Local, NaiveDate};

use crate::model::{Booking, DateRange, RoomId};

use super::EngineError;

pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `start <= end` — checked on every entry point before any store access.
pub(crate) fn validate_order(range: &DateRange) -> Result<(), EngineError> {
    if range.start > range.end {
        return Err(EngineError::InvalidRange("start date is after end date"));
    }
    Ok(())
}

/// Allocation additionally requires a strictly future start date. Occupancy
/// queries deliberately skip this check — past windows stay queryable.
pub(crate) fn validate_allocation(
    range: &DateRange,
    today: NaiveDate,
) -> Result<(), EngineError> {
    if range.start <= today {
        return Err(EngineError::InvalidRange(
            "start date must be strictly in the future",
        ));
    }
    validate_order(range)
}

/// True when any active booking on `room` overlaps `range` (inclusive on
/// both ends). Inactive bookings and other rooms' bookings never conflict.
pub fn has_conflict(bookings: &[Booking], room: RoomId, range: &DateRange) -> bool {
    bookings
        .iter()
        .any(|b| b.active && b.room_id == Some(room) && b.range.overlaps(range))
}
