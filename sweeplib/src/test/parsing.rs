use crate::error::ParseError;
use crate::parser::{parse_output, Metric, Metrics, FIELD_COUNT};
use crate::util::simulator_line;

#[test]
fn parses_counters_at_their_offsets() {
    let metrics = parse_output("pages 100 frames 10 page faults 812 disk reads 790 disk writes 301\n").unwrap();
    assert_eq!(metrics, Metrics { page_faults: 812, disk_reads: 790, disk_writes: 301 });
}

#[test]
fn counters_are_opaque() {
    // More reads than faults isn't checked
    let expected = Metrics { page_faults: 1, disk_reads: 50, disk_writes: 0 };
    assert_eq!(parse_output(&simulator_line(100, 2, &expected)).unwrap(), expected);
}

#[test]
fn wrong_word_count_is_reported() {
    match parse_output("100 10 rand sort\n") {
        Err(ParseError::FieldCount { expected, found, .. }) => {
            assert_eq!(expected, FIELD_COUNT);
            assert_eq!(found, 4);
        }
        other => panic!("expected a field count error, got {other:?}"),
    }
    assert!(matches!(parse_output(""), Err(ParseError::FieldCount { found: 0, .. })));
}

#[test]
fn extra_line_is_a_field_count_error() {
    let output = "Algorithm custom not yet implemented.\npages 100 frames 10 page faults 1 disk reads 1 disk writes 1\n";
    assert!(matches!(parse_output(output), Err(ParseError::FieldCount { .. })));
}

#[test]
fn non_numeric_counter_names_the_metric() {
    match parse_output("pages 100 frames 10 page faults 12 disk reads many disk writes 3") {
        Err(ParseError::InvalidCounter { metric, token, .. }) => {
            assert_eq!(metric, Metric::DiskReads);
            assert_eq!(token, "many");
        }
        other => panic!("expected an invalid counter error, got {other:?}"),
    }
    assert!(matches!(
        parse_output("pages 100 frames 10 page faults -1 disk reads 0 disk writes 0"),
        Err(ParseError::InvalidCounter { metric: Metric::PageFaults, .. })
    ));
}
