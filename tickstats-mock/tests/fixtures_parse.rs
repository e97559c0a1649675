use tickstats_mock::{SESSIONS, rows, table};

#[test]
fn every_session_parses_into_a_table() {
    for name in SESSIONS {
        let t = table(name).unwrap_or_else(|| panic!("missing session {name}"));
        assert_eq!(t.len(), rows(name).unwrap().len(), "{name}");
    }
}

#[test]
fn unknown_session_is_none() {
    assert!(table("NOPE").is_none());
}

#[test]
fn two_day_session_has_two_days() {
    assert_eq!(table("TWO_DAY").unwrap().day_count(), 2);
}
