use chrono::NaiveDate;

use crate::model::{DateRange, RoomId};

use super::availability::{first_free_room, fully_occupied_dates};
use super::conflict::{today, validate_allocation, validate_order};
use super::{BookingEngine, EngineError};

impl BookingEngine {
    /// Lowest-id room free for the whole of `range`, or `Ok(None)` when
    /// every room has a conflicting active booking.
    ///
    /// Requires `range.start` strictly after today and `start <= end`;
    /// violations fail with [`EngineError::InvalidRange`] before anything is
    /// read. Reads one snapshot of rooms and bookings, so identical data
    /// always yields the same answer.
    pub async fn find_available_room(
        &self,
        range: DateRange,
    ) -> Result<Option<RoomId>, EngineError> {
        validate_allocation(&range, today())?;
        let rooms = self.rooms.fetch_all().await?;
        let bookings = self.bookings.fetch_all().await?;
        Ok(first_free_room(&rooms, &bookings, &range))
    }

    /// Ascending dates in `range` on which no room in the inventory is free.
    ///
    /// Only `start <= end` is required — past and present windows are
    /// queryable here; the strictly-future rule applies to allocation alone.
    pub async fn fully_occupied_dates(
        &self,
        range: DateRange,
    ) -> Result<Vec<NaiveDate>, EngineError> {
        validate_order(&range)?;
        let rooms = self.rooms.fetch_all().await?;
        let bookings = self.bookings.fetch_all().await?;
        Ok(fully_occupied_dates(&rooms, &bookings, &range))
    }
}
