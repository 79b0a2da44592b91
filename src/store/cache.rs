//! Cache-invalidation policy for the storefront's local mirrors.
//!
//! Seat counts and the ticket list are best-effort copies of server state.
//! A successful write never re-reads the affected showtime; instead it
//! applies a local seat delta. The only reconciliation trigger is the full
//! ticket refetch that follows a delete.

use crate::types::ShowtimeId;

/// Whether the ticket list must be re-read after a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    /// Local state is considered current
    Keep,
    /// Replace the ticket list with a fresh server copy
    RefetchTickets,
}

/// A signed change to one showtime's cached seat count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatDelta {
    pub showtime_id: ShowtimeId,
    pub delta: i64,
}

/// The local consequences of a successful write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEffect {
    pub seats: Option<SeatDelta>,
    pub reconcile: Reconcile,
}

pub struct CachePolicy;

impl CachePolicy {
    /// A sold seat leaves the pool; the ticket list is not re-read.
    pub fn after_purchase(showtime_id: ShowtimeId) -> CacheEffect {
        CacheEffect {
            seats: Some(SeatDelta {
                showtime_id,
                delta: -1,
            }),
            reconcile: Reconcile::Keep,
        }
    }

    /// A deleted ticket returns its seat and forces a ticket refetch.
    pub fn after_delete(showtime_id: ShowtimeId) -> CacheEffect {
        CacheEffect {
            seats: Some(SeatDelta {
                showtime_id,
                delta: 1,
            }),
            reconcile: Reconcile::RefetchTickets,
        }
    }

    /// Updates are patched into the cached tickets directly.
    pub fn after_update() -> CacheEffect {
        CacheEffect {
            seats: None,
            reconcile: Reconcile::Keep,
        }
    }
}
