use crate::tail::params::Offset;
use std::io::SeekFrom;

/// The byte window to serve once the file size is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub seek: SeekFrom,
    /// Bytes to copy from the seek position.
    pub limit: u64,
    /// Bytes between the seek position and end-of-file at stat time.
    pub available: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowPlan {
    /// The start position is at or past end-of-file.
    NoContent,
    Serve(Window),
}

/// Resolve the requested offset and limit against the current file size.
///
/// A `FromEnd` offset reaching back to (or before) the start of the file is clamped
/// to the whole file, overriding the requested limit. Negative limits serve nothing.
pub fn resolve_window(offset: Offset, limit: i64, size: u64) -> WindowPlan {
    let (offset, limit) = match offset {
        Offset::FromEnd(n) if n >= size => (Offset::FromStart(0), size),
        other => (other, u64::try_from(limit).unwrap_or(0)),
    };

    match offset {
        Offset::FromStart(n) if n >= size => WindowPlan::NoContent,
        Offset::FromStart(n) => WindowPlan::Serve(Window {
            seek: SeekFrom::Start(n),
            limit,
            available: size - n,
        }),
        // n < size here, so n fits in an i64 as long as the size does.
        Offset::FromEnd(n) => WindowPlan::Serve(Window {
            seek: SeekFrom::End(-(n as i64)),
            limit,
            available: n,
        }),
    }
}
