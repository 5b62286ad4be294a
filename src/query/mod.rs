//! Query parameter parsing for `GET /api/mps`
//!
//! The query string arrives as raw key/value pairs so that malformed or
//! repeated values produce our own error body instead of the extractor's
//! plain-text rejection.

use crate::error::AppError;
use crate::{DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
use std::num::IntErrorKind;

/// Query parameters exactly as received
#[derive(Debug, Clone, Default)]
pub struct MpParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub party: Option<String>,
    pub constituency: Option<String>,
    pub search: Option<String>,
    pub fuzzy: Option<String>,
}

impl MpParams {
    /// Collect known keys from decoded pairs. A repeated key keeps its last
    /// value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut params.page,
                "limit" => &mut params.limit,
                "party" => &mut params.party,
                "constituency" => &mut params.constituency,
                "search" => &mut params.search,
                "fuzzy" => &mut params.fuzzy,
                _ => continue,
            };
            *slot = Some(value);
        }
        params
    }
}

/// Validated list query
#[derive(Debug, Clone, PartialEq)]
pub struct MpQuery {
    /// Page number (1-indexed)
    pub page: usize,
    /// Records per page
    pub limit: usize,
    /// Exact party code, case-insensitive
    pub party: Option<String>,
    /// Exact constituency, case-insensitive
    pub constituency: Option<String>,
    /// Substring over name or constituency
    pub search: Option<String>,
    /// Approximate match over name or constituency
    pub fuzzy: Option<String>,
}

impl Default for MpQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            party: None,
            constituency: None,
            search: None,
            fuzzy: None,
        }
    }
}

impl MpQuery {
    /// Validate raw parameters. Blank strings count as absent.
    pub fn parse(params: MpParams) -> Result<Self, AppError> {
        let page = parse_bounded("page", params.page.as_deref(), DEFAULT_PAGE, None)?;
        let limit = parse_bounded("limit", params.limit.as_deref(), DEFAULT_LIMIT, Some(MAX_LIMIT))?;

        Ok(Self {
            page,
            limit,
            party: non_blank(params.party),
            constituency: non_blank(params.constituency),
            search: non_blank(params.search),
            fuzzy: non_blank(params.fuzzy),
        })
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.clamp(1, MAX_LIMIT);
        self
    }

    pub fn with_party(mut self, party: impl Into<String>) -> Self {
        self.party = non_blank(Some(party.into()));
        self
    }

    pub fn with_constituency(mut self, constituency: impl Into<String>) -> Self {
        self.constituency = non_blank(Some(constituency.into()));
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(Some(search.into()));
        self
    }

    pub fn with_fuzzy(mut self, fuzzy: impl Into<String>) -> Self {
        self.fuzzy = non_blank(Some(fuzzy.into()));
        self
    }

    /// Number of records skipped before this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_bounded(
    name: &'static str,
    raw: Option<&str>,
    default: usize,
    max: Option<usize>,
) -> Result<usize, AppError> {
    let raw = match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(default),
    };

    let value: i64 = raw.parse().map_err(|e: std::num::ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => match max {
            Some(max) => {
                AppError::invalid_param(name, format!("must be less than or equal to {}", max))
            }
            None => AppError::invalid_param(name, "value is too large"),
        },
        IntErrorKind::NegOverflow => {
            AppError::invalid_param(name, "must be greater than or equal to 1")
        }
        _ => AppError::invalid_param(name, format!("expected an integer, got {:?}", raw)),
    })?;

    if value < 1 {
        return Err(AppError::invalid_param(name, "must be greater than or equal to 1"));
    }
    if let Some(max) = max {
        if value > max as i64 {
            return Err(AppError::invalid_param(
                name,
                format!("must be less than or equal to {}", max),
            ));
        }
    }

    usize::try_from(value).map_err(|_| AppError::invalid_param(name, "value is too large"))
}
