use thiserror::Error;

pub const DEFAULT_OFFSET: i64 = -2048;
pub const DEFAULT_LIMIT: i64 = 2048;

/// Highest rotated-file suffix a client may ask for.
pub const MAX_SUFFIX: i64 = 10;

/// Where the served window starts.
///
/// A negative `offset` query value counts back from end-of-file; it is lifted into
/// `FromEnd` at parse time so the seek origin never depends on a sign check later on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    FromStart(u64),
    FromEnd(u64),
}

impl From<i64> for Offset {
    fn from(value: i64) -> Self {
        if value < 0 {
            Offset::FromEnd(value.unsigned_abs())
        } else {
            Offset::FromStart(value as u64)
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamError {
    #[error("invalid offset {value:?}")]
    InvalidOffset { value: String },

    #[error("invalid limit {value:?}")]
    InvalidLimit { value: String },

    #[error("invalid suffix {value:?}")]
    InvalidSuffix { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestParams {
    pub offset: Offset,
    pub limit: i64,
    /// Raw suffix string, used verbatim when building the target path.
    pub suffix: Option<String>,
}

impl Default for RequestParams {
    fn default() -> Self {
        Self {
            offset: Offset::from(DEFAULT_OFFSET),
            limit: DEFAULT_LIMIT,
            suffix: None,
        }
    }
}

impl RequestParams {
    /// Parse the `offset`, `limit` and `suffix` parameters out of a raw query string.
    ///
    /// Only the first occurrence of a key is considered, and an empty value counts as
    /// absent. Unknown keys are ignored.
    pub fn from_query(query: Option<&str>) -> Result<Self, ParamError> {
        let query = query.unwrap_or_default();
        let mut params = RequestParams::default();

        if let Some(offset) = first_value(query, "offset") {
            let value = offset
                .parse::<i64>()
                .map_err(|_| ParamError::InvalidOffset { value: offset })?;
            params.offset = Offset::from(value);
        }

        if let Some(limit) = first_value(query, "limit") {
            params.limit = limit
                .parse::<i64>()
                .map_err(|_| ParamError::InvalidLimit { value: limit })?;
        }

        if let Some(suffix) = first_value(query, "suffix") {
            match suffix.parse::<i64>() {
                Ok(n) if (0..=MAX_SUFFIX).contains(&n) => params.suffix = Some(suffix),
                _ => return Err(ParamError::InvalidSuffix { value: suffix }),
            }
        }

        Ok(params)
    }
}

fn first_value(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}
