use crate::tail::{Offset, Window, WindowPlan, resolve_window};
use pretty_assertions::assert_eq;
use std::io::SeekFrom;

#[test]
fn from_start_within_file() {
    assert_eq!(
        resolve_window(Offset::FromStart(2), 3, 10),
        WindowPlan::Serve(Window {
            seek: SeekFrom::Start(2),
            limit: 3,
            available: 8,
        })
    );
}

#[test]
fn from_end_within_file() {
    assert_eq!(
        resolve_window(Offset::FromEnd(3), 10, 10),
        WindowPlan::Serve(Window {
            seek: SeekFrom::End(-3),
            limit: 10,
            available: 3,
        })
    );
}

#[test]
fn from_end_reaching_file_start_serves_whole_file() {
    let whole = WindowPlan::Serve(Window {
        seek: SeekFrom::Start(0),
        limit: 10,
        available: 10,
    });

    assert_eq!(resolve_window(Offset::FromEnd(10), 1, 10), whole);
    assert_eq!(resolve_window(Offset::FromEnd(2048), 5, 10), whole);
    assert_eq!(resolve_window(Offset::FromEnd(1 << 63), -1, 10), whole);
}

#[test]
fn from_start_at_or_past_end_is_no_content() {
    assert_eq!(resolve_window(Offset::FromStart(10), 5, 10), WindowPlan::NoContent);
    assert_eq!(resolve_window(Offset::FromStart(20), 5, 10), WindowPlan::NoContent);
}

#[test]
fn empty_file_is_no_content() {
    assert_eq!(resolve_window(Offset::FromEnd(2048), 2048, 0), WindowPlan::NoContent);
    assert_eq!(resolve_window(Offset::FromStart(0), 2048, 0), WindowPlan::NoContent);
}

#[test]
fn negative_limit_serves_nothing() {
    assert_eq!(
        resolve_window(Offset::FromStart(0), -4, 10),
        WindowPlan::Serve(Window {
            seek: SeekFrom::Start(0),
            limit: 0,
            available: 10,
        })
    );
}

#[test]
fn window_start_matches_offset_rule() {
    let size = 64u64;
    for raw in -(size as i64)..(size as i64) {
        let plan = resolve_window(Offset::from(raw), 8, size);
        let WindowPlan::Serve(window) = plan else {
            panic!("offset {raw} should be served");
        };

        let start = match window.seek {
            SeekFrom::Start(n) => n,
            SeekFrom::End(n) => (size as i64 + n) as u64,
            SeekFrom::Current(_) => unreachable!(),
        };
        let expected = if raw < 0 { (size as i64 + raw) as u64 } else { raw as u64 };

        assert_eq!(start, expected, "offset {raw}");
        assert_eq!(start + window.available, size, "offset {raw}");
    }
}
