use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filters sent alongside a paginated request. Each entry becomes its own
/// query parameter.
pub type Filters = BTreeMap<String, FilterValue>;

/// A single filter value. Numbers render the way a browser would print
/// them, so `5.0` becomes `5`.
#[derive(Debug, Clone, PartialEq, Display, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    #[display("{_0}")]
    Text(String),
    #[display("{_0}")]
    Number(f64),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[display("asc")]
    Asc,
    #[display("desc")]
    Desc,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("Unknown sort order: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Could not encode query string: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

/// Page position, filters and sort order for a paginated endpoint.
///
/// `page` is 1-indexed. Only [`PaginationParams::previous_page`] clamps it;
/// an out-of-range page is left for the server to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Filters>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Sort>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

impl PaginationParams {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            filters: None,
            sort: None,
        }
    }

    pub fn with_filters(mut self, filters: Filters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_sort(
        mut self,
        field: impl Into<String>,
        order: SortOrder,
    ) -> Self {
        self.sort = Some(Sort {
            field: field.into(),
            order,
        });
        self
    }

    /// Jump to a page. The value is taken verbatim.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Step back one page, never going below the first page.
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Replace the filters. A filter change invalidates the current page
    /// position, so the page goes back to 1.
    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = Some(filters);
        self.page = 1;
    }

    pub fn set_sort(&mut self, field: impl Into<String>, order: SortOrder) {
        self.sort = Some(Sort {
            field: field.into(),
            order,
        });
    }

    /// Query parameters in wire order: `page`, `pageSize`, one entry per
    /// filter, then `sortField` and `sortOrder`.
    ///
    /// Every key appears once. A later entry with the same key replaces the
    /// value of the earlier one in place, so a filter named `page` wins over
    /// the page number and the sort wins over filters named `sortField` or
    /// `sortOrder`.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("pageSize".to_string(), self.page_size.to_string()),
        ];
        if let Some(filters) = &self.filters {
            for (key, value) in filters {
                upsert(&mut pairs, key, value.to_string());
            }
        }
        if let Some(sort) = &self.sort {
            upsert(&mut pairs, "sortField", sort.field.clone());
            upsert(&mut pairs, "sortOrder", sort.order.to_string());
        }
        pairs
    }

    pub fn query_string(&self) -> Result<String, QueryError> {
        Ok(serde_urlencoded::to_string(self.query_pairs())?)
    }

    /// Append the query string to `base`.
    pub fn target(&self, base: &str) -> Result<String, QueryError> {
        let separator = if base.contains('?') { '&' } else { '?' };
        Ok(format!("{base}{separator}{}", self.query_string()?))
    }
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: String) {
    match pairs.iter_mut().find(|(existing, _)| existing == key) {
        Some((_, slot)) => *slot = value,
        None => pairs.push((key.to_string(), value)),
    }
}
