//! Max pain signal computation.
//!
//! The pure core of the feed:
//! - Computes the max pain strike per (instrument, expiry) from open
//!   interest observations
//! - Aligns the two instruments' expiry calendars by nearest date
//! - Assembles the current-state snapshot
//! - Maintains the idempotent, bounded history log
//!
//! Everything here is a pure function of its inputs and an explicit
//! config — no network, no filesystem, no ambient state.

pub mod align;
pub mod history;
pub mod max_pain;
pub mod phase;
pub mod score;
pub mod snapshot;

pub use align::{align, is_monthly_expiry};
pub use history::append_if_new_day;
pub use max_pain::{compute_max_pain, SpotBand, StrikeFilter};
pub use phase::classify_phase;
pub use score::conviction_score;
pub use snapshot::build_snapshot;
