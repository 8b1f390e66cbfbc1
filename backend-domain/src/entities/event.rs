// Event entity
// Curated by hand upstream, so string fields tolerate placeholders and
// legacy separator variants.

use serde::{Deserialize, Deserializer, Serialize};

use super::location::Location;

/// Placeholder curators use for dates and times that are not decided yet.
pub const UNDECIDED: &str = "未定";

/// Category labels the front end knows how to render. Unknown labels are
/// not rejected; storage keeps whatever the client sent.
pub const KNOWN_CATEGORIES: [&str; 8] = [
    "伝統",
    "ビジネス",
    "対話",
    "展示",
    "食",
    "自然",
    "パフォーマンス",
    "体験",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    TicketSupported,
    TicketNotSupported,
    Finished,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::TicketSupported => "ticket_supported",
            EventStatus::TicketNotSupported => "ticket_not_supported",
            EventStatus::Finished => "finished",
        }
    }
}

impl From<&str> for EventStatus {
    fn from(s: &str) -> Self {
        match s {
            "ticket_not_supported" => EventStatus::TicketNotSupported,
            "finished" => EventStatus::Finished,
            _ => EventStatus::TicketSupported,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Canonical form is `YYYY/MM/DD`; may also hold `YYYY-MM-DD` from
    /// older data or the undecided placeholder.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    /// Absent for online-only events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(
        default,
        deserialize_with = "string_or_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub category: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_url: Option<String>,
}

impl Event {
    /// Partial-field merge; absent patch fields leave the record untouched.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(start_time) = patch.start_time {
            self.start_time = start_time;
        }
        if let Some(end_time) = patch.end_time {
            self.end_time = end_time;
        }
        if let Some(location_id) = patch.location_id {
            self.location_id = Some(location_id);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(event_url) = patch.event_url {
            self.event_url = Some(event_url);
        }
    }
}

/// Creation payload; the identifier is allocated server-side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, deserialize_with = "string_or_seq")]
    pub category: Vec<String>,
    #[serde(default)]
    pub event_url: Option<String>,
}

/// Update payload; every field optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location_id: Option<String>,
    #[serde(default)]
    pub status: Option<EventStatus>,
    #[serde(default, deserialize_with = "opt_string_or_seq")]
    pub category: Option<Vec<String>>,
    #[serde(default)]
    pub event_url: Option<String>,
}

/// Read-time projection of an event joined with its venue. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EventWithLocation {
    #[serde(flatten)]
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

// The category field historically held a single label; newer data holds a
// list. Accept both on input.
fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        One(String),
        Many(Vec<String>),
    }

    match StringOrSeq::deserialize(deserializer)? {
        StringOrSeq::One(value) => {
            if value.is_empty() {
                Ok(Vec::new())
            } else {
                Ok(vec![value])
            }
        }
        StringOrSeq::Many(values) => Ok(values),
    }
}

fn opt_string_or_seq<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    string_or_seq(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_accepts_single_string() {
        let event: Event =
            serde_json::from_str(r#"{"id":"1","title":"茶会","date":"2025/11/16","category":"伝統"}"#)
                .expect("deserialize event");
        assert_eq!(event.category, vec!["伝統".to_string()]);
    }

    #[test]
    fn category_accepts_array() {
        let event: Event = serde_json::from_str(
            r#"{"id":"1","title":"茶会","date":"2025/11/16","category":["伝統","食"]}"#,
        )
        .expect("deserialize event");
        assert_eq!(event.category.len(), 2);
        assert!(event
            .category
            .iter()
            .all(|label| KNOWN_CATEGORIES.contains(&label.as_str())));
    }

    #[test]
    fn unknown_category_labels_are_not_rejected() {
        let event: Event = serde_json::from_str(
            r#"{"id":"1","title":"茶会","date":"2025/11/16","category":"謎のジャンル"}"#,
        )
        .expect("deserialize event");
        assert!(!KNOWN_CATEGORIES.contains(&event.category[0].as_str()));
    }

    #[test]
    fn category_defaults_to_empty() {
        let event: Event =
            serde_json::from_str(r#"{"id":"1","title":"茶会","date":"2025/11/16"}"#)
                .expect("deserialize event");
        assert!(event.category.is_empty());
    }

    #[test]
    fn status_defaults_to_ticket_supported() {
        let event: Event =
            serde_json::from_str(r#"{"id":"1","title":"茶会","date":"2025/11/16"}"#)
                .expect("deserialize event");
        assert_eq!(event.status, EventStatus::TicketSupported);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let event = Event {
            id: "1".to_string(),
            title: "坐禅体験".to_string(),
            date: "2025/11/16".to_string(),
            start_time: "09:00".to_string(),
            location_id: Some("2".to_string()),
            ..Event::default()
        };
        let json = serde_json::to_value(&event).expect("serialize event");
        assert_eq!(json["startTime"], "09:00");
        assert_eq!(json["locationId"], "2");
        assert!(json.get("eventUrl").is_none());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut event = Event {
            id: "3".to_string(),
            title: "before".to_string(),
            date: "2025/11/16".to_string(),
            ..Event::default()
        };
        event.apply(EventPatch {
            title: Some("after".to_string()),
            ..EventPatch::default()
        });
        assert_eq!(event.title, "after");
        assert_eq!(event.date, "2025/11/16");
        assert_eq!(event.id, "3");
    }
}
