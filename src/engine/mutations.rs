use tracing::{debug, info};

use crate::model::Booking;

use super::conflict::{has_conflict, today, validate_allocation};
use super::{BookingEngine, EngineError};

impl BookingEngine {
    /// Allocate a room for `booking` and persist the confirmed record.
    ///
    /// Only the requested dates are read from the input; a caller-supplied
    /// room or active flag is never trusted. On allocation the booking is
    /// confirmed in place (room assigned, `active = true`) and written
    /// through the store, returning `Ok(true)`. When no room is free the
    /// input is left exactly as supplied, nothing is written, and the result
    /// is `Ok(false)` — declined, not failed.
    ///
    /// Rooms are tried in ascending-id order. The overlap re-check and the
    /// insert run under the candidate room's mutex, one room at a time, so
    /// two concurrent requests cannot both confirm the same room for
    /// overlapping dates.
    pub async fn create_booking(&self, booking: &mut Booking) -> Result<bool, EngineError> {
        validate_allocation(&booking.range, today())?;

        let mut rooms = self.rooms.fetch_all().await?;
        rooms.sort_unstable_by_key(|r| r.id);

        for room in &rooms {
            let lock = self.room_lock(room.id);
            let _guard = lock.lock().await;

            // Re-read under the lock: another allocation may have landed on
            // this room since the room list was fetched.
            let bookings = self.bookings.fetch_all().await?;
            if has_conflict(&bookings, room.id, &booking.range) {
                debug!(room = %room.id, "room conflicts with requested range");
                continue;
            }

            let mut confirmed = booking.clone();
            confirmed.room_id = Some(room.id);
            confirmed.active = true;
            self.bookings.insert(confirmed).await?;

            // The caller's booking is only touched once the write landed.
            booking.room_id = Some(room.id);
            booking.active = true;
            info!(
                booking = %booking.id,
                room = %room.id,
                nights = booking.range.len_days(),
                "booking confirmed"
            );
            return Ok(true);
        }

        debug!(booking = %booking.id, "no room available for requested range");
        Ok(false)
    }
}
