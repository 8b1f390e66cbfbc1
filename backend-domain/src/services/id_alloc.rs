// Identifier allocation
//
// Identifiers are small decimal strings. The next one is max(existing) + 1
// so a deleted record's identifier is never reissued; ids that do not parse
// as integers are ignored.

pub fn next_id<S: AsRef<str>>(existing: &[S]) -> String {
    existing
        .iter()
        .filter_map(|id| id.as_ref().parse::<u64>().ok())
        .max()
        .map(|max| (max + 1).to_string())
        .unwrap_or_else(|| "1".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_starts_at_one() {
        let ids: [&str; 0] = [];
        assert_eq!(next_id(&ids), "1");
    }

    #[test]
    fn increments_past_the_maximum() {
        assert_eq!(next_id(&["1", "2", "3"]), "4");
        assert_eq!(next_id(&["2", "9"]), "10");
    }

    #[test]
    fn deleted_ids_are_not_reissued() {
        // record "2" was deleted; length-based allocation would hand out "3"
        // again even though "3" still exists
        assert_eq!(next_id(&["1", "3"]), "4");
    }

    #[test]
    fn non_numeric_ids_are_ignored() {
        assert_eq!(next_id(&["abc"]), "1");
        assert_eq!(next_id(&["abc", "7"]), "8");
    }
}
