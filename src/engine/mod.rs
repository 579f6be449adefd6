mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;

pub use availability::{first_free_room, fully_occupied_dates};
pub use conflict::has_conflict;
pub use error::EngineError;

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::model::{Booking, Room, RoomId};
use crate::store::Store;

/// The allocation core: decides which room (if any) serves a date-range
/// request and derives fully-occupied date sets, reading and writing through
/// the injected stores.
///
/// Writers serialize per room, not globally: `create_booking` holds one
/// room's mutex across its check-then-insert, so concurrent requests for
/// disjoint rooms proceed in parallel while two requests can never both
/// confirm the same room for overlapping dates.
pub struct BookingEngine {
    rooms: Arc<dyn Store<Room>>,
    bookings: Arc<dyn Store<Booking>>,
    room_locks: DashMap<RoomId, Arc<Mutex<()>>>,
}

impl BookingEngine {
    pub fn new(rooms: Arc<dyn Store<Room>>, bookings: Arc<dyn Store<Booking>>) -> Self {
        Self {
            rooms,
            bookings,
            room_locks: DashMap::new(),
        }
    }

    /// The mutex guarding allocations against `room`. Created lazily; the
    /// map entry is released before the mutex is awaited.
    pub(super) fn room_lock(&self, room: RoomId) -> Arc<Mutex<()>> {
        self.room_locks.entry(room).or_default().value().clone()
    }
}
