//! Hotel room allocation without double-booking.
//!
//! The [`engine::BookingEngine`] decides whether a room is free for an
//! inclusive date range, which room to assign, and which calendar dates have
//! zero free rooms. Persistence is an external collaborator behind the
//! generic [`store::Store`] trait.

pub mod engine;
pub mod model;
pub mod store;

pub use engine::{BookingEngine, EngineError};
pub use model::{Booking, Customer, DateRange, Room};
pub use store::{MemStore, Store, StoreError};
