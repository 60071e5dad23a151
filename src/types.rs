//! Payload types used by the admin event client

use chrono::{DateTime, FixedOffset};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// An event as returned by the admin event service
///
/// Decoding only requires `id` and `name`. Every other field is optional and
/// an explicit `null` is kept in `extra`, so re-serializing yields the JSON
/// the service sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Event {
    /// Event ID
    pub id: String,

    /// Display name
    pub name: String,

    pub description: Option<String>,

    /// Start time as sent by the service (RFC 3339)
    pub start_time_stamp: Option<String>,

    /// End time as sent by the service (RFC 3339)
    pub end_time_stamp: Option<String>,

    /// IANA timezone name
    pub timezone: Option<String>,

    pub partner_id: Option<String>,

    pub status: Option<String>,

    /// Any JSON number, as sent
    pub expected_volunteer_count: Option<Number>,

    /// Fields this client does not model, plus modelled fields sent as `null`
    pub extra: Map<String, Value>,
}

impl Event {
    /// Case-insensitive substring match against name and description
    ///
    /// An empty term matches every event.
    pub fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    pub fn start_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_time(self.start_time_stamp.as_deref())
    }

    pub fn end_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_time(self.end_time_stamp.as_deref())
    }
}

fn parse_time(raw: Option<&str>) -> Option<DateTime<FixedOffset>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
}

impl TryFrom<Map<String, Value>> for Event {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: take_required(&mut map, "id")?,
            name: take_required(&mut map, "name")?,
            description: take(&mut map, "description")?,
            start_time_stamp: take(&mut map, "startTimeStamp")?,
            end_time_stamp: take(&mut map, "endTimeStamp")?,
            timezone: take(&mut map, "timezone")?,
            partner_id: take(&mut map, "partnerId")?,
            status: take(&mut map, "status")?,
            expected_volunteer_count: take(&mut map, "expectedVolunteerCount")?,
            extra: map,
        })
    }
}

impl From<Event> for Map<String, Value> {
    fn from(event: Event) -> Self {
        let mut map = event.extra;
        map.insert("id".to_string(), Value::String(event.id));
        map.insert("name".to_string(), Value::String(event.name));
        put(&mut map, "description", event.description.map(Value::String));
        put(&mut map, "startTimeStamp", event.start_time_stamp.map(Value::String));
        put(&mut map, "endTimeStamp", event.end_time_stamp.map(Value::String));
        put(&mut map, "timezone", event.timezone.map(Value::String));
        put(&mut map, "partnerId", event.partner_id.map(Value::String));
        put(&mut map, "status", event.status.map(Value::String));
        put(
            &mut map,
            "expectedVolunteerCount",
            event.expected_volunteer_count.map(Value::Number),
        );
        map
    }
}

/// Events whose name or description contains `term`, in their original order
pub fn filter_events<'a>(events: &'a [Event], term: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| e.matches(term)).collect()
}

/// A host that can be assigned to an event
///
/// Decoded the same way as [`Event`]: only `id` and `name` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Host {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub status: Option<String>,
    pub extra: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Host {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: take_required(&mut map, "id")?,
            name: take_required(&mut map, "name")?,
            email: take(&mut map, "email")?,
            status: take(&mut map, "status")?,
            extra: map,
        })
    }
}

impl From<Host> for Map<String, Value> {
    fn from(host: Host) -> Self {
        let mut map = host.extra;
        map.insert("id".to_string(), Value::String(host.id));
        map.insert("name".to_string(), Value::String(host.name));
        put(&mut map, "email", host.email.map(Value::String));
        put(&mut map, "status", host.status.map(Value::String));
        map
    }
}

/// Remove and decode `key`; a `null` value stays in `map` and reads as `None`
fn take<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &str) -> serde_json::Result<Option<T>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => match map.remove(key) {
            Some(value) => serde_json::from_value(value).map(Some),
            None => Ok(None),
        },
    }
}

fn take_required<T: DeserializeOwned>(map: &mut Map<String, Value>, key: &'static str) -> serde_json::Result<T> {
    take(map, key)?.ok_or_else(|| serde_json::Error::missing_field(key))
}

fn put(map: &mut Map<String, Value>, key: &str, value: Option<Value>) {
    if let Some(value) = value {
        map.insert(key.to_string(), value);
    }
}

/// Request body for creating an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventPayload {
    pub opportunity_id: String,
    pub variant_id: String,
    pub partner_id: String,
    pub name: String,
    pub start_time_stamp: String,
    pub end_time_stamp: String,
    pub timezone: String,
    pub language: String,
    pub expected_volunteer_count: u32,
    pub tags: Vec<String>,
}

/// Request body for updating an event; unset fields are left out of the JSON
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time_stamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time_stamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_volunteer_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Request body for cancelling an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelEventPayload {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(name: &str, description: Option<&str>) -> Event {
        Event {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: description.map(str::to_string),
            start_time_stamp: Some("2025-06-01T09:00:00Z".to_string()),
            end_time_stamp: Some("2025-06-01T12:00:00+02:00".to_string()),
            timezone: Some("UTC".to_string()),
            partner_id: None,
            status: None,
            expected_volunteer_count: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn test_event_deserialize_keeps_unknown_fields() {
        let raw = json!({
            "id": "e1",
            "name": "Beach Cleanup",
            "startTimeStamp": "2025-06-01T09:00:00Z",
            "endTimeStamp": "2025-06-01T12:00:00Z",
            "timezone": "UTC",
            "expectedVolunteerCount": 25,
            "venue": { "city": "Lisbon" }
        });

        let parsed: Event = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.id, "e1");
        assert_eq!(parsed.expected_volunteer_count, Some(Number::from(25)));
        assert_eq!(parsed.extra["venue"]["city"], "Lisbon");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_matches_name_and_description() {
        let e = event("Beach Cleanup", Some("Collect plastic on the shore"));
        assert!(e.matches("beach"));
        assert!(e.matches("PLASTIC"));
        assert!(e.matches(""));
        assert!(!e.matches("forest"));

        let no_description = event("Tree Planting", None);
        assert!(!no_description.matches("plastic"));
    }

    #[test]
    fn test_filter_events_preserves_order() {
        let events = vec![
            event("Beach Cleanup", None),
            event("Food Drive", Some("Pack boxes for the beach town shelter")),
            event("Tree Planting", None),
        ];

        let found: Vec<&str> = filter_events(&events, "beach")
            .into_iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(found, vec!["Beach Cleanup", "Food Drive"]);
        assert_eq!(filter_events(&events, "").len(), 3);
    }

    #[test]
    fn test_times() {
        let e = event("Beach Cleanup", None);
        assert_eq!(e.start_time().unwrap().to_rfc3339(), "2025-06-01T09:00:00+00:00");
        assert_eq!(e.end_time().unwrap().offset().local_minus_utc(), 2 * 3600);

        let mut bad = e.clone();
        bad.start_time_stamp = Some("tomorrow".to_string());
        assert!(bad.start_time().is_none());
        bad.end_time_stamp = None;
        assert!(bad.end_time().is_none());
    }

    #[test]
    fn test_event_nulls_round_trip() {
        let raw = json!({
            "id": "e1",
            "name": "Beach Cleanup",
            "description": null,
            "startTimeStamp": null,
            "endTimeStamp": "2025-06-01T12:00:00Z",
            "timezone": null,
            "partnerId": null,
            "status": null,
            "expectedVolunteerCount": null
        });

        let parsed: Event = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.timezone, None);
        assert_eq!(parsed.expected_volunteer_count, None);
        assert!(parsed.start_time().is_none());
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_event_count_keeps_any_number() {
        for count in [json!(25.0), json!(-3), json!(1.5e3)] {
            let raw = json!({ "id": "e1", "name": "Beach Cleanup", "expectedVolunteerCount": count });
            let parsed: Event = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(
                parsed.expected_volunteer_count.as_ref().map(|n| Value::Number(n.clone())),
                Some(count)
            );
            assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
        }
    }

    #[test]
    fn test_event_requires_id_and_name() {
        let missing = serde_json::from_value::<Event>(json!({ "name": "Beach Cleanup" })).unwrap_err();
        assert!(missing.to_string().contains("missing field `id`"));
        assert!(serde_json::from_value::<Event>(json!({ "id": "e1", "name": null })).is_err());
        assert!(serde_json::from_value::<Event>(json!({ "id": 7, "name": "x" })).is_err());
    }

    #[test]
    fn test_host_nulls_round_trip() {
        let raw = json!({
            "id": "h1",
            "name": "Ana",
            "email": null,
            "status": "active",
            "languages": ["pt", "en"]
        });

        let parsed: Host = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.status.as_deref(), Some("active"));
        assert_eq!(parsed.extra["languages"][1], "en");
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
    }

    #[test]
    fn test_update_payload_omits_unset_fields() {
        let payload = UpdateEventPayload {
            name: Some("Renamed".to_string()),
            expected_volunteer_count: Some(40),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Renamed", "expectedVolunteerCount": 40 })
        );
    }
}
