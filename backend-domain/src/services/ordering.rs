// Chronological event ordering
//
// Source data is curated by hand: dates and times may be empty, carry the
// undecided placeholder, or fail to parse entirely. The sort keys push every
// ambiguous value to the end of its day or of the list instead of failing.

use crate::entities::{EventWithLocation, UNDECIDED};

/// Sort key for a date nobody has decided yet; orders after every real date.
const UNDATED_KEY: u32 = 9999_1231;
/// 23:59 in minutes; an undecided start time sorts to the end of its day.
const UNTIMED_KEY: u32 = 23 * 60 + 59;

/// `year*10000 + month*100 + day` for a well-formed date, tolerant fallbacks
/// otherwise.
pub fn date_sort_key(date: &str) -> u32 {
    if date.is_empty() || date == UNDECIDED {
        return UNDATED_KEY;
    }
    let normalized = date.replace('/', "-");
    let parts: Vec<&str> = normalized.split('-').collect();
    if parts.len() != 3 {
        return UNDATED_KEY;
    }
    let year = parts[0].parse::<u32>().unwrap_or(9999);
    let month = parts[1].parse::<u32>().unwrap_or(12);
    let day = parts[2].parse::<u32>().unwrap_or(31);
    year * 10_000 + month * 100 + day
}

/// Minutes since midnight; fractional-second suffixes are truncated first.
pub fn time_sort_key(time: &str) -> u32 {
    if time.is_empty() || time == "0:00" || time.contains(UNDECIDED) {
        return UNTIMED_KEY;
    }
    let trimmed = time.split('.').next().unwrap_or(time);
    let mut parts = trimmed.split(':');
    let hour = parts.next().and_then(|p| p.parse::<u32>().ok()).unwrap_or(0);
    let minute = parts.next().and_then(|p| p.parse::<u32>().ok()).unwrap_or(0);
    hour * 60 + minute
}

/// Stable ascending sort by (date key, start-time key); events with equal
/// keys keep their input order.
pub fn sort_events(events: &mut [EventWithLocation]) {
    events.sort_by_key(|entry| {
        (
            date_sort_key(&entry.event.date),
            time_sort_key(&entry.event.start_time),
        )
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Event;

    fn entry(id: &str, date: &str, start_time: &str) -> EventWithLocation {
        EventWithLocation {
            event: Event {
                id: id.to_string(),
                title: format!("event {id}"),
                date: date.to_string(),
                start_time: start_time.to_string(),
                ..Event::default()
            },
            location: None,
        }
    }

    fn sorted_ids(mut entries: Vec<EventWithLocation>) -> Vec<String> {
        sort_events(&mut entries);
        entries.into_iter().map(|e| e.event.id).collect()
    }

    #[test]
    fn earlier_date_sorts_first_regardless_of_time() {
        let ids = sorted_ids(vec![
            entry("a", "2025/11/17", "08:00"),
            entry("b", "2025/11/16", "22:00"),
        ]);
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn undecided_date_sorts_after_every_real_date() {
        let ids = sorted_ids(vec![
            entry("a", "未定", ""),
            entry("b", "2030/01/01", "10:00"),
        ]);
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn undecided_dates_keep_input_order() {
        let ids = sorted_ids(vec![
            entry("a", "未定", ""),
            entry("b", "未定", ""),
            entry("c", "未定", ""),
        ]);
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn empty_start_time_sorts_after_a_morning_slot() {
        let ids = sorted_ids(vec![
            entry("a", "2025/11/16", ""),
            entry("b", "2025/11/16", "09:00"),
        ]);
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn hyphen_dates_sort_with_slash_dates() {
        let ids = sorted_ids(vec![
            entry("a", "2025/11/17", "09:00"),
            entry("b", "2025-11-16", "09:00"),
        ]);
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn date_key_handles_malformed_input() {
        assert_eq!(date_sort_key("2025/11/16"), 2025_11_16);
        assert_eq!(date_sort_key(""), 9999_1231);
        assert_eq!(date_sort_key("未定"), 9999_1231);
        assert_eq!(date_sort_key("11/16"), 9999_1231);
        // unparsable components fall back per-component
        assert_eq!(date_sort_key("2025/xx/16"), 2025_12_16);
    }

    #[test]
    fn time_key_handles_placeholders_and_fractions() {
        assert_eq!(time_sort_key("09:00"), 540);
        assert_eq!(time_sort_key(""), 1439);
        assert_eq!(time_sort_key("0:00"), 1439);
        assert_eq!(time_sort_key("10:00未定"), 1439);
        assert_eq!(time_sort_key("09:30.5"), 570);
        assert_eq!(time_sort_key("xx:30"), 30);
    }
}
