// CSV interchange
//
// Column headers are the localized labels the spreadsheet templates use, so
// exports and imports stay byte-compatible with files curators already have.
// Import must survive spreadsheet round-trips: Excel renders long digit
// strings in scientific notation and re-saves them that way, so
// identifier-like cells are recovered before validation.

use std::collections::HashMap;

use thiserror::Error;

use crate::entities::{coordinates_in_range, Event, EventStatus, Location};

/// Byte-order mark prefixed to exports so spreadsheet apps detect UTF-8.
pub const BOM: char = '\u{feff}';

const EVENT_HEADERS: [&str; 9] = [
    "ID",
    "タイトル",
    "説明",
    "日付",
    "開始時間",
    "終了時間",
    "場所ID",
    "場所名",
    "ステータス",
];

const LOCATION_HEADERS: [&str; 6] = ["ID", "場所名", "住所", "緯度", "経度", "説明"];

#[derive(Debug, Error)]
pub enum CsvCodecError {
    #[error("CSV data is empty or invalid")]
    EmptyInput,
    #[error("no valid event rows found")]
    NoValidEvents,
    #[error("no valid location rows found")]
    NoValidLocations,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV buffer error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize events with the venue display name resolved per row (empty when
/// the reference is absent or dangling).
pub fn events_to_csv(events: &[Event], locations: &[Location]) -> Result<String, CsvCodecError> {
    let location_names: HashMap<&str, &str> = locations
        .iter()
        .map(|location| (location.id.as_str(), location.name.as_str()))
        .collect();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EVENT_HEADERS)?;
    for event in events {
        let location_id = event.location_id.as_deref().unwrap_or("");
        let location_name = location_names.get(location_id).copied().unwrap_or("");
        writer.write_record([
            event.id.as_str(),
            event.title.as_str(),
            event.description.as_str(),
            event.date.as_str(),
            event.start_time.as_str(),
            event.end_time.as_str(),
            location_id,
            location_name,
            event.status.as_str(),
        ])?;
    }
    finish(writer)
}

pub fn locations_to_csv(locations: &[Location]) -> Result<String, CsvCodecError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(LOCATION_HEADERS)?;
    for location in locations {
        let lat = location.lat.to_string();
        let lng = location.lng.to_string();
        writer.write_record([
            location.id.as_str(),
            location.name.as_str(),
            location.address.as_str(),
            lat.as_str(),
            lng.as_str(),
            location.description.as_deref().unwrap_or(""),
        ])?;
    }
    finish(writer)
}

pub fn events_from_csv(text: &str) -> Result<Vec<Event>, CsvCodecError> {
    let mut reader = reader_for(text)?;
    let headers = reader.headers()?.clone();

    let mut events = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < headers.len() {
            continue;
        }
        let mut event = Event::default();
        for (header, value) in headers.iter().zip(record.iter()) {
            match header {
                "ID" => event.id = restore_scientific(value),
                "タイトル" => event.title = value.to_string(),
                "説明" => event.description = value.to_string(),
                "日付" => event.date = value.to_string(),
                "開始時間" => event.start_time = value.to_string(),
                "終了時間" => event.end_time = value.to_string(),
                "場所ID" => {
                    let id = restore_scientific(value);
                    event.location_id = if id.is_empty() { None } else { Some(id) };
                }
                "ステータス" => event.status = EventStatus::from(value),
                // 場所名 is derived on export; other columns are ignored
                _ => {}
            }
        }
        if !event.id.is_empty() && !event.title.is_empty() && !event.date.is_empty() {
            events.push(event);
        }
    }
    if events.is_empty() {
        return Err(CsvCodecError::NoValidEvents);
    }
    Ok(events)
}

pub fn locations_from_csv(text: &str) -> Result<Vec<Location>, CsvCodecError> {
    let mut reader = reader_for(text)?;
    let headers = reader.headers()?.clone();

    let mut locations = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() < headers.len() {
            continue;
        }
        let mut location = Location::default();
        let mut lat = None;
        let mut lng = None;
        for (header, value) in headers.iter().zip(record.iter()) {
            match header {
                "ID" => location.id = restore_scientific(value),
                "場所名" => location.name = value.to_string(),
                "住所" => location.address = value.to_string(),
                "緯度" => lat = value.parse::<f64>().ok(),
                "経度" => lng = value.parse::<f64>().ok(),
                "説明" => {
                    if !value.is_empty() {
                        location.description = Some(value.to_string());
                    }
                }
                _ => {}
            }
        }
        let (Some(lat), Some(lng)) = (lat, lng) else {
            continue;
        };
        if location.id.is_empty() || location.name.is_empty() || !coordinates_in_range(lat, lng) {
            continue;
        }
        location.lat = lat;
        location.lng = lng;
        locations.push(location);
    }
    if locations.is_empty() {
        return Err(CsvCodecError::NoValidLocations);
    }
    Ok(locations)
}

/// Recover an identifier cell a spreadsheet rendered in scientific notation:
/// `1.23E+10` becomes `12300000000`. Cells that do not parse are kept as-is.
pub fn restore_scientific(value: &str) -> String {
    if !(value.contains("E+") || value.contains("e+")) {
        return value.to_string();
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => format!("{:.0}", number.round()),
        _ => value.to_string(),
    }
}

fn reader_for(text: &str) -> Result<csv::Reader<&[u8]>, CsvCodecError> {
    let body = strip_bom(text).trim();
    if body.lines().count() < 2 {
        return Err(CsvCodecError::EmptyInput);
    }
    Ok(csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes()))
}

fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

fn finish(writer: csv::Writer<Vec<u8>>) -> Result<String, CsvCodecError> {
    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    let body = String::from_utf8_lossy(&bytes).into_owned();
    Ok(format!("{BOM}{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, name: &str, lat: f64, lng: f64) -> Location {
        Location {
            id: id.to_string(),
            name: name.to_string(),
            address: "神奈川県鎌倉市".to_string(),
            lat,
            lng,
            description: None,
        }
    }

    #[test]
    fn locations_round_trip_through_csv() {
        let original = vec![
            location("1", "建長寺", 35.3376, 139.5532),
            location("2", "鶴岡八幡宮", 35.3258, 139.5565),
        ];
        let csv = locations_to_csv(&original).expect("export");
        assert!(csv.starts_with(BOM));

        let parsed = locations_from_csv(&csv).expect("import");
        assert_eq!(parsed.len(), original.len());
        for (parsed, original) in parsed.iter().zip(original.iter()) {
            assert_eq!(parsed.id, original.id);
            assert_eq!(parsed.name, original.name);
            assert_eq!(parsed.lat, original.lat);
            assert_eq!(parsed.lng, original.lng);
        }
    }

    #[test]
    fn event_export_resolves_location_names() {
        let events = vec![
            Event {
                id: "1".to_string(),
                title: "座禅会".to_string(),
                date: "2025/11/16".to_string(),
                location_id: Some("1".to_string()),
                ..Event::default()
            },
            Event {
                id: "2".to_string(),
                title: "オンライン講座".to_string(),
                date: "2025/11/17".to_string(),
                ..Event::default()
            },
        ];
        let locations = vec![location("1", "建長寺", 35.3376, 139.5532)];

        let csv = events_to_csv(&events, &locations).expect("export");
        let mut lines = csv.trim_start_matches(BOM).lines();
        assert_eq!(
            lines.next(),
            Some("ID,タイトル,説明,日付,開始時間,終了時間,場所ID,場所名,ステータス")
        );
        let first = lines.next().expect("first row");
        assert!(first.contains("建長寺"));
        let second = lines.next().expect("second row");
        assert!(second.contains("オンライン講座"));
        assert!(second.contains(",,ticket_supported"));
    }

    #[test]
    fn scientific_notation_ids_are_recovered() {
        assert_eq!(restore_scientific("1.23E+10"), "12300000000");
        assert_eq!(restore_scientific("1.23e+10"), "12300000000");
        assert_eq!(restore_scientific("42"), "42");
        assert_eq!(restore_scientific("garbage E+ text"), "garbage E+ text");
    }

    #[test]
    fn event_import_recovers_mangled_ids() {
        let csv = "ID,タイトル,日付,場所ID\n1.23E+10,手ぬぐい市,2025/11/16,1.5E+3\n";
        let events = events_from_csv(csv).expect("import");
        assert_eq!(events[0].id, "12300000000");
        assert_eq!(events[0].location_id.as_deref(), Some("1500"));
    }

    #[test]
    fn header_only_input_is_rejected() {
        let err = events_from_csv("ID,タイトル,日付\n").expect_err("reject header-only");
        assert!(matches!(err, CsvCodecError::EmptyInput));
    }

    #[test]
    fn rows_missing_mandatory_fields_are_dropped() {
        let csv = "ID,タイトル,日付\n1,茶会,2025/11/16\n2,,2025/11/17\n";
        let events = events_from_csv(csv).expect("import");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "1");
    }

    #[test]
    fn all_rows_invalid_is_an_error() {
        let csv = "ID,タイトル,日付\n,,\n";
        let err = events_from_csv(csv).expect_err("no valid rows");
        assert!(matches!(err, CsvCodecError::NoValidEvents));
    }

    #[test]
    fn quoted_fields_with_commas_survive() {
        let csv = "ID,場所名,住所,緯度,経度\n1,\"報国寺, 竹の庭\",鎌倉市浄明寺,35.3192,139.5724\n";
        let locations = locations_from_csv(csv).expect("import");
        assert_eq!(locations[0].name, "報国寺, 竹の庭");
    }

    #[test]
    fn location_rows_with_bad_coordinates_are_dropped() {
        let csv = "ID,場所名,緯度,経度\n1,建長寺,abc,139.55\n2,円覚寺,35.33,139.54\n";
        let locations = locations_from_csv(csv).expect("import");
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].id, "2");
    }

    #[test]
    fn import_strips_leading_bom() {
        let csv = "\u{feff}ID,場所名,緯度,経度\n1,建長寺,35.33,139.55\n";
        let locations = locations_from_csv(csv).expect("import");
        assert_eq!(locations[0].id, "1");
    }

    #[test]
    fn unrecognized_headers_are_ignored() {
        let csv = "ID,タイトル,日付,メモ\n1,茶会,2025/11/16,覚書\n";
        let events = events_from_csv(csv).expect("import");
        assert_eq!(events[0].title, "茶会");
    }
}
