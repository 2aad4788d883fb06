//! Paginated read path over the stored collection.

use serde::{Deserialize, Serialize};

use crate::domains::events::{Event, EventStore};

/// Offset/limit window, already clamped to non-negative values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventsWindow {
    pub offset: usize,
    /// `None` means "to the end of the collection".
    pub limit: Option<usize>,
}

impl EventsWindow {
    /// Negative offsets become 0; a limit of 0 or less means no limit.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            offset: offset.map_or(0, |o| usize::try_from(o).unwrap_or(0)),
            limit: limit.and_then(|l| usize::try_from(l).ok()).filter(|&l| l > 0),
        }
    }

    /// Lenient parse of raw query-string values; garbage counts as absent.
    pub fn parse(offset: Option<&str>, limit: Option<&str>) -> Self {
        let int = |raw: Option<&str>| raw.and_then(|s| s.trim().parse::<i64>().ok());
        Self::new(int(offset), int(limit))
    }

    /// The `[offset, offset + limit)` sub-slice, clamped to `events`.
    pub fn apply<'a>(&self, events: &'a [Event]) -> &'a [Event] {
        let start = self.offset.min(events.len());
        let end = match self.limit {
            Some(limit) => start.saturating_add(limit).min(events.len()),
            None => events.len(),
        };
        &events[start..end]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    /// Size of the whole collection, not of `events`.
    pub count: usize,
    pub events: Vec<Event>,
}

/// Read one window of a marketplace's events. Unknown marketplaces read as
/// an empty collection.
pub fn query_events(store: &EventStore, marketplace: &str, window: EventsWindow) -> EventsResponse {
    store.read_with(marketplace, |events| EventsResponse {
        count: events.len(),
        events: window.apply(events).to_vec(),
    })
}
