//! # Domain Model
//!
//! The `Prayer` record is the only entity this service persists.
//!
//! # Invariants
//!
//! - Every persisted prayer carries all five schema fields.
//! - `prayerID` is generated on create and never changed afterwards.

mod prayer;

pub use prayer::{Prayer, PrayerDraft, PrayerId};
