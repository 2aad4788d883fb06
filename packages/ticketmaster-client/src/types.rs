use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Query for one page of the Discovery `events.json` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    /// ISO country code used as the marketplace filter.
    pub country_code: String,
    /// Page size (the API rejects anything above 500).
    pub size: u32,
    /// Zero-based page index.
    pub page: u32,
}

impl EventsQuery {
    pub fn new(country_code: impl Into<String>, size: u32, page: u32) -> Self {
        Self {
            country_code: country_code.into(),
            size,
            page,
        }
    }
}

/// A single event from the Discovery API.
///
/// Only the fields the service re-serves are kept; everything else in the
/// upstream payload is ignored during decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dates: EventDates,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDates {
    #[serde(default, deserialize_with = "null_as_default")]
    pub start: EventStart,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventStart {
    #[serde(rename = "localDate", default, deserialize_with = "null_as_default")]
    pub local_date: String,
    /// Full UTC timestamp; absent upstream for date-only events.
    #[serde(rename = "dateTime", default, deserialize_with = "null_as_default")]
    pub date_time: String,
}

/// Pagination block returned alongside each listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageMetadata {
    #[serde(default)]
    pub size: u32,
    #[serde(rename = "totalElements", default)]
    pub total_elements: u64,
    #[serde(rename = "totalPages", default)]
    pub total_pages: u32,
    #[serde(default)]
    pub number: u32,
}

/// Wrapper for the HAL `_embedded` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Embedded {
    #[serde(default)]
    pub events: Vec<Event>,
}

/// One decoded page of the events listing.
///
/// Both sections are optional: the API drops `_embedded` entirely when a
/// page has no results, and some error payloads carry neither.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventsPage {
    #[serde(rename = "_embedded")]
    pub embedded: Option<Embedded>,
    pub page: Option<PageMetadata>,
}

impl EventsPage {
    /// Events on this page, empty when the `_embedded` section is missing.
    pub fn events(&self) -> &[Event] {
        self.embedded
            .as_ref()
            .map(|e| e.events.as_slice())
            .unwrap_or_default()
    }

    /// Consume the page and take ownership of its events.
    pub fn into_events(self) -> Vec<Event> {
        self.embedded.map(|e| e.events).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_discovery_payload_and_ignores_extra_fields() {
        let body = r#"{
            "_embedded": {
                "events": [{
                    "id": "G5vYZ9",
                    "name": "Arctic Monkeys",
                    "type": "event",
                    "url": "https://www.ticketmaster.com/event/G5vYZ9",
                    "locale": "en-us",
                    "dates": {
                        "start": {
                            "localDate": "2026-11-02",
                            "localTime": "19:30:00",
                            "dateTime": "2026-11-03T00:30:00Z"
                        },
                        "timezone": "America/New_York"
                    }
                }]
            },
            "_links": { "self": { "href": "/discovery/v2/events.json?page=0" } },
            "page": { "size": 200, "totalElements": 1, "totalPages": 1, "number": 0 }
        }"#;

        let page: EventsPage = serde_json::from_str(body).unwrap();
        let events = page.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "G5vYZ9");
        assert_eq!(events[0].dates.start.local_date, "2026-11-02");
        assert_eq!(events[0].dates.start.date_time, "2026-11-03T00:30:00Z");

        let meta = page.page.unwrap();
        assert_eq!(meta.total_pages, 1);
        assert_eq!(meta.total_elements, 1);
    }

    #[test]
    fn missing_sections_decode_as_none() {
        let page: EventsPage = serde_json::from_str("{}").unwrap();
        assert!(page.embedded.is_none());
        assert!(page.page.is_none());
        assert!(page.events().is_empty());
    }

    #[test]
    fn date_only_event_has_empty_timestamp() {
        let event: Event = serde_json::from_str(
            r#"{"id":"x","name":"TBA","url":"u","dates":{"start":{"localDate":"2027-01-01"}}}"#,
        )
        .unwrap();
        assert_eq!(event.dates.start.date_time, "");
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let event: Event = serde_json::from_str(
            r#"{"id":"a","name":null,"url":null,"dates":{"start":{"localDate":"2026-01-01","dateTime":null}}}"#,
        )
        .unwrap();
        assert_eq!(event.id, "a");
        assert_eq!(event.name, "");
        assert_eq!(event.url, "");
        assert_eq!(event.dates.start.local_date, "2026-01-01");
        assert_eq!(event.dates.start.date_time, "");

        let event: Event = serde_json::from_str(r#"{"id":"b","dates":null}"#).unwrap();
        assert_eq!(event.dates, EventDates::default());
        let event: Event = serde_json::from_str(r#"{"id":"c","dates":{"start":null}}"#).unwrap();
        assert_eq!(event.dates.start, EventStart::default());
    }

    #[test]
    fn event_serializes_with_upstream_field_names() {
        let event = Event {
            id: "1".into(),
            name: "Show".into(),
            url: "https://example.com".into(),
            dates: EventDates {
                start: EventStart {
                    local_date: "2026-10-19".into(),
                    date_time: "2026-10-19T20:00:00Z".into(),
                },
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["dates"]["start"]["localDate"], "2026-10-19");
        assert_eq!(json["dates"]["start"]["dateTime"], "2026-10-19T20:00:00Z");
    }
}
