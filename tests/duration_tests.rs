use clockify_report::core::duration::{
    DurationColumns, DurationSource, row_seconds, seconds_from_source, source_for_row,
};
use clockify_report::dataset::{Cell, Dataset};
use clockify_report::utils::time::{format_seconds, parse_hms};

#[test]
fn test_format_parse_round_trip() {
    for secs in [0i64, 1, 59, 60, 3599, 3600, 86399, 86400, 108000, 359999] {
        let rendered = format_seconds(secs);
        assert_eq!(parse_hms(&rendered), Some(secs), "round trip of {secs}");
    }
}

#[test]
fn test_format_seconds_hours_unbounded() {
    assert_eq!(format_seconds(108000), "30:00:00");
    assert_eq!(format_seconds(0), "00:00:00");
    assert_eq!(format_seconds(5400), "01:30:00");
}

#[test]
fn test_parse_hms_rejects_malformed() {
    assert_eq!(parse_hms(""), None);
    assert_eq!(parse_hms("1:2"), None);
    assert_eq!(parse_hms("1:2:3:4"), None);
    assert_eq!(parse_hms("aa:bb:cc"), None);
    assert_eq!(parse_hms("01:30"), None);
}

#[test]
fn test_parse_hms_tolerates_overflowing_fields() {
    // 90 minutes is unusual but well-defined
    assert_eq!(parse_hms("00:90:00"), Some(5400));
    assert_eq!(parse_hms("01:60:00"), Some(7200));
}

#[test]
fn test_seconds_from_source_decimal_truncates() {
    assert_eq!(seconds_from_source(&DurationSource::Decimal(1.5)), 5400);
    assert_eq!(seconds_from_source(&DurationSource::Decimal(0.5)), 1800);
    // 0.0001 h = 0.36 s, truncated toward zero
    assert_eq!(seconds_from_source(&DurationSource::Decimal(0.0001)), 0);
    // negative durations never leak out
    assert_eq!(seconds_from_source(&DurationSource::Decimal(-1.0)), 0);
}

#[test]
fn test_seconds_from_source_text_silent_zero() {
    assert_eq!(
        seconds_from_source(&DurationSource::Text("02:00:00".to_string())),
        7200
    );
    assert_eq!(
        seconds_from_source(&DurationSource::Text("bogus".to_string())),
        0
    );
    assert_eq!(seconds_from_source(&DurationSource::Missing), 0);
}

fn sample_dataset() -> Dataset {
    Dataset {
        columns: vec![
            "Project".to_string(),
            "Duration (decimal)".to_string(),
            "Duration (h)".to_string(),
        ],
        rows: vec![
            vec![
                Cell::Text("A".to_string()),
                Cell::Number(1.5),
                Cell::Text("09:09:09".to_string()),
            ],
            vec![
                Cell::Text("A".to_string()),
                Cell::Empty,
                Cell::Text("02:00:00".to_string()),
            ],
            vec![Cell::Text("A".to_string()), Cell::Empty, Cell::Empty],
        ],
    }
}

#[test]
fn test_source_selection_prefers_numeric_decimal() {
    let dataset = sample_dataset();
    let cols = DurationColumns::locate(&dataset);

    // numeric decimal wins over the text cell
    assert_eq!(
        source_for_row(&dataset.rows[0], &cols),
        DurationSource::Decimal(1.5)
    );
    // empty decimal falls back to the text cell
    assert_eq!(
        source_for_row(&dataset.rows[1], &cols),
        DurationSource::Text("02:00:00".to_string())
    );
    // nothing at all
    assert_eq!(source_for_row(&dataset.rows[2], &cols), DurationSource::Missing);

    assert_eq!(row_seconds(&dataset.rows[0], &cols), 5400);
    assert_eq!(row_seconds(&dataset.rows[1], &cols), 7200);
    assert_eq!(row_seconds(&dataset.rows[2], &cols), 0);
}
