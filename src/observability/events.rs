//! Observability events
//!
//! Every log line the service emits about its own lifecycle or about a
//! prayer carries one of these as its `event` field, so log consumers can
//! match on a stable name instead of the free-text message.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Listener bound, ready for requests
    Serving,
    /// Shutdown signal received
    ShutdownStart,
    /// Server stopped
    ShutdownComplete,

    // Prayer operations
    /// Record created
    PrayerCreated,
    /// Record read by id
    PrayerRead,
    /// Record replaced
    PrayerUpdated,
    /// Record removed
    PrayerDeleted,
    /// Table scanned
    PrayersListed,
    /// Lookup by id found nothing
    PrayerNotFound,
    /// Body failed parsing or validation
    RequestRejected,
    /// Fault with no client mapping
    RequestFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "PRAYERS_SERVING",
            Event::ShutdownStart => "SHUTDOWN_START",
            Event::ShutdownComplete => "SHUTDOWN_COMPLETE",

            Event::PrayerCreated => "PRAYER_CREATED",
            Event::PrayerRead => "PRAYER_READ",
            Event::PrayerUpdated => "PRAYER_UPDATED",
            Event::PrayerDeleted => "PRAYER_DELETED",
            Event::PrayersListed => "PRAYERS_LISTED",
            Event::PrayerNotFound => "PRAYER_NOT_FOUND",
            Event::RequestRejected => "REQUEST_REJECTED",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
