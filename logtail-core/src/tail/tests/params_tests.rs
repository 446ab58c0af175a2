use crate::tail::{DEFAULT_LIMIT, Offset, ParamError, RequestParams};
use pretty_assertions::assert_eq;

fn parse(query: &str) -> Result<RequestParams, ParamError> {
    RequestParams::from_query(Some(query))
}

#[test]
fn missing_query_uses_defaults() {
    let params = RequestParams::from_query(None).unwrap();

    assert_eq!(params.offset, Offset::FromEnd(2048));
    assert_eq!(params.limit, DEFAULT_LIMIT);
    assert_eq!(params.suffix, None);
}

#[test]
fn empty_values_count_as_absent() {
    let params = parse("offset=&limit=&suffix=").unwrap();

    assert_eq!(params, RequestParams::default());
}

#[test]
fn parses_positive_offset_from_start() {
    let params = parse("offset=2&limit=3").unwrap();

    assert_eq!(params.offset, Offset::FromStart(2));
    assert_eq!(params.limit, 3);
}

#[test]
fn parses_negative_offset_from_end() {
    let params = parse("offset=-3").unwrap();

    assert_eq!(params.offset, Offset::FromEnd(3));
}

#[test]
fn zero_offset_is_from_start() {
    assert_eq!(parse("offset=0").unwrap().offset, Offset::FromStart(0));
    assert_eq!(parse("offset=-0").unwrap().offset, Offset::FromStart(0));
}

#[test]
fn most_negative_offset_does_not_overflow() {
    let params = parse("offset=-9223372036854775808").unwrap();

    assert_eq!(params.offset, Offset::FromEnd(1 << 63));
}

#[test]
fn negative_limit_is_accepted_at_parse_time() {
    assert_eq!(parse("limit=-5").unwrap().limit, -5);
}

#[test]
fn rejects_non_numeric_offset() {
    assert_eq!(
        parse("offset=abc"),
        Err(ParamError::InvalidOffset {
            value: "abc".to_string()
        })
    );
}

#[test]
fn rejects_out_of_range_offset() {
    assert!(matches!(
        parse("offset=99999999999999999999"),
        Err(ParamError::InvalidOffset { .. })
    ));
}

#[test]
fn rejects_non_numeric_limit() {
    assert_eq!(
        parse("limit=1.5"),
        Err(ParamError::InvalidLimit {
            value: "1.5".to_string()
        })
    );
}

#[test]
fn accepts_suffix_bounds() {
    assert_eq!(parse("suffix=0").unwrap().suffix.as_deref(), Some("0"));
    assert_eq!(parse("suffix=10").unwrap().suffix.as_deref(), Some("10"));
}

#[test]
fn rejects_suffix_out_of_range() {
    for suffix in ["11", "-1", "x", "1.0"] {
        assert_eq!(
            parse(&format!("suffix={suffix}")),
            Err(ParamError::InvalidSuffix {
                value: suffix.to_string()
            }),
            "suffix {suffix:?} should be rejected"
        );
    }
}

#[test]
fn keeps_raw_suffix_string() {
    assert_eq!(parse("suffix=007").unwrap().suffix.as_deref(), Some("007"));
}

#[test]
fn first_occurrence_wins() {
    let params = parse("limit=5&limit=oops").unwrap();

    assert_eq!(params.limit, 5);
}

#[test]
fn decodes_percent_encoded_values() {
    let params = parse("offset=%2D10&other=ignored").unwrap();

    assert_eq!(params.offset, Offset::FromEnd(10));
}
