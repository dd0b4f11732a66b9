//! Whole-document tests over the bundled samples
//!
//! - Use `Sample` to load documents
//! - Use `assert_workout` for structure
//! - Check totals per group, not just counts

use prac_parser::prac::testing::assert_workout;
use prac_parser::prac::testing::samples::Sample;
use prac_parser::{parse_file, ErrorKind, GroupLabel, Units, WarningKind};
use rstest::rstest;

#[test]
fn test_basic_sample_structure() {
    let parsed = Sample::Basic.parse().unwrap();

    assert_workout(&parsed)
        .title("Monday Base")
        .author(Some("Coach Rivera"))
        .units(Units::Meters)
        .warning_lines(&[])
        .set_count(3)
        .groups(&['A'])
        .set(0, |set| {
            set.name("Warmup")
                .repeat(1)
                .item_count(2)
                .total_distance('A', 600)
                .item(1, |item| {
                    item.reps(4).distance(50).desc("kick").intervals(&["1:00"]);
                });
        })
        .set(1, |set| {
            set.name("Main Set")
                .repeat(3)
                .total_distance('A', 1500)
                .item(0, |item| {
                    item.reps(4)
                        .distance(100)
                        .desc("free")
                        .intervals(&["1:30", "1:40"]);
                })
                .item(1, |item| {
                    item.reps(1).distance(100).desc("easy").intervals(&[]);
                });
        })
        .set(2, |set| {
            set.name("Cooldown").item_count(1);
        })
        .total_distance('A', 2300)
        .total_time('A', 1680);
}

#[test]
fn test_basic_sample_config() {
    let parsed = Sample::Basic.parse().unwrap();
    assert_eq!(parsed.config.date.as_deref(), Some("2024-01-15"));
    assert_eq!(parsed.config.level.as_deref(), Some("Intermediate"));
    assert_eq!(parsed.config.description, None);
    assert_eq!(parsed.config.unit_symbol(), "m");
}

#[test]
fn test_multi_group_sample() {
    let parsed = Sample::MultiGroup.parse().unwrap();

    assert_workout(&parsed)
        .units(Units::Yards)
        .set_count(3)
        .groups(&['A', 'B', 'C'])
        .set(0, |set| {
            set.groups(&['A', 'B', 'C']).item(0, |item| {
                item.distance(300)
                    .variation('B', |b| {
                        b.distance(200).intervals(&["3:30"]);
                    })
                    .variation('C', |c| {
                        c.distance(150).intervals(&["3:00"]);
                    });
            });
        })
        .set(1, |set| {
            set.repeat(2)
                .total_distance('A', 1600)
                .total_distance('B', 1200)
                .total_distance('C', 900)
                .item(1, |item| {
                    item.groups(&['A', 'B']).variation('C', |c| {
                        c.distance(200).desc("pull");
                    });
                });
        })
        .set(2, |set| {
            set.groups(&['A']).total_distance('C', 100);
        })
        .total_distance('A', 2000)
        .total_distance('B', 1500)
        .total_distance('C', 1150)
        .total_time('A', 1590)
        .total_time('B', 1470)
        .total_time('C', 1140);
}

#[test]
fn test_annotated_sample_notes_and_warnings() {
    let parsed = Sample::Annotated.parse().unwrap();

    assert_workout(&parsed)
        .title("Relay Day #3")
        .units(Units::Yards)
        .warning_lines(&[3, 10])
        .set_count(2)
        .set(0, |set| {
            set.name("Warmup")
                .item(0, |item| {
                    item.note(Some("relaxed"));
                })
                .item(1, |item| {
                    item.reps(8).distance(25).note(None);
                });
        })
        .set(1, |set| {
            set.name("Sprint").repeat(4).item(0, |item| {
                item.note(Some("dive start")).variation('B', |b| {
                    b.intervals(&[":50"]);
                });
            });
        })
        .total_distance('A', 500)
        .total_distance('B', 500)
        .total_time('A', 600)
        .total_time('B', 620);

    assert_eq!(
        parsed.warnings[0].kind,
        WarningKind::UnknownMetadataKey {
            key: "coach".to_string()
        }
    );
    assert_eq!(parsed.warnings[1].kind, WarningKind::UnrecognizedLine);
    assert_eq!(parsed.sets[0].note, None);
}

#[rstest]
#[case(Sample::OrphanItem, ErrorKind::StructuralError, 3, "item found outside of any set")]
#[case(Sample::ZeroDistance, ErrorKind::FieldValidationError, 4, "distance must be positive")]
#[case(Sample::BadUnits, ErrorKind::InvalidConfigValue, 2, "invalid units 'kilometers'")]
#[case(Sample::MalformedBracket, ErrorKind::GrammarError, 2, "group C")]
fn test_invalid_samples(
    #[case] sample: Sample,
    #[case] kind: ErrorKind,
    #[case] line: usize,
    #[case] message: &str,
) {
    let err = sample.parse().unwrap_err();
    assert_eq!(err.kind(), kind);
    assert_eq!(err.line(), Some(line));
    assert!(
        err.to_string().contains(message),
        "expected '{}' in: {}",
        message,
        err
    );
    assert!(err.to_string().starts_with(&format!("line {}: ", line)));
}

#[test]
fn test_malformed_bracket_names_the_group() {
    let err = Sample::MalformedBracket.parse().unwrap_err();
    assert_eq!(err.group(), GroupLabel::new('C'));
}

#[test]
fn test_model_serializes_to_json() {
    let parsed = Sample::MultiGroup.parse().unwrap();
    let json = serde_json::to_value(&parsed).unwrap();

    assert_eq!(json["config"]["units"], "yards");
    let item = &json["sets"][1]["items"][0];
    assert_eq!(item["reps"], 6);
    assert_eq!(item["distance"], 100);
    assert_eq!(item["intervals"], serde_json::json!(["1:20"]));
    assert_eq!(item["variations"]["B"]["distance"], 75);
    assert_eq!(item["variations"]["C"]["reps"], 5);

    let totals = serde_json::to_value(parsed.summary().group_totals()).unwrap();
    assert_eq!(totals[1]["group"], "B");
    assert_eq!(totals[1]["distance"], 1500);
}

#[test]
fn test_warnings_serialize_with_kind_tag() {
    let parsed = Sample::Annotated.parse().unwrap();
    let json = serde_json::to_value(&parsed.warnings).unwrap();

    assert_eq!(json[0]["line"], 3);
    assert_eq!(json[0]["kind"]["kind"], "unknown-metadata-key");
    assert_eq!(json[0]["kind"]["key"], "coach");
    assert_eq!(json[1]["kind"]["kind"], "unrecognized-line");
}

#[test]
fn test_loader_matches_in_memory_parse() {
    for sample in Sample::ALL.into_iter().filter(|s| s.is_valid()) {
        let from_disk = parse_file(sample.path()).unwrap();
        let in_memory = sample.parse().unwrap();
        assert_eq!(from_disk, in_memory, "{}", sample.file_name());
    }
}

#[test]
fn test_reparse_is_deterministic() {
    for sample in Sample::ALL.into_iter().filter(|s| s.is_valid()) {
        assert_eq!(sample.parse().unwrap(), sample.parse().unwrap());
    }
}
