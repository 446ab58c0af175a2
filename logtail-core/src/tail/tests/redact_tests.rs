use crate::tail::Redactor;
use crate::tail::redact::fill;
use pretty_assertions::assert_eq;

#[test]
fn fill_preserves_byte_length() {
    for len in 0..10 {
        assert_eq!(fill(len).len(), len);
    }
}

#[test]
fn fill_uses_full_blocks() {
    assert_eq!(fill(6), "\u{2588}\u{2588}".as_bytes());
    assert_eq!(fill(4), "\u{2588}#".as_bytes());
    assert_eq!(fill(2), b"##");
}

#[test]
fn redacts_every_match() {
    let redactor = Redactor::from_pattern(r"secret=\w+").unwrap();

    let out = redactor.redact(b"a secret=abc b secret=xyz c");

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "a \u{2588}\u{2588}\u{2588}# b \u{2588}\u{2588}\u{2588}# c"
    );
}

#[test]
fn redaction_keeps_length_and_is_deterministic() {
    let redactor = Redactor::from_pattern(r"\d+").unwrap();
    let input = b"user 12 logged in from 10.0.0.1 after 3 attempts";

    let first = redactor.redact(input);
    let second = redactor.redact(input);

    assert_eq!(first.len(), input.len());
    assert_eq!(first, second);
}

#[test]
fn content_without_matches_is_unchanged() {
    let redactor = Redactor::from_pattern("token").unwrap();

    assert_eq!(redactor.redact(b"nothing here"), b"nothing here");
}

#[test]
fn matches_non_utf8_content() {
    let redactor = Redactor::from_pattern("key").unwrap();

    let out = redactor.redact(b"\xff\xfekey\xff");

    assert_eq!(out, b"\xff\xfe\xe2\x96\x88\xff");
}

#[test]
fn invalid_pattern_is_rejected() {
    assert!(Redactor::from_pattern("(unclosed").is_err());
}
