//! Search, filter, sort and pagination over a store's array.
//!
//! A [`ListQuery`] is what a screen's toolbar sends: free-text search,
//! branch / classification / status filters, one sort column and a page.
//! [`ListQuery::apply`] runs those steps in that order and returns a
//! [`Page`].

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use medsupply_types::{Branch, Classification};

use crate::error::QueryError;
use crate::record::Record;

/// A sortable column value.
///
/// Values of different kinds never meet in one sort because a column is
/// always one kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortValue {
    /// Free text, compared lexicographically.
    Text(String),
    /// Money or a count.
    Number(Decimal),
    /// A calendar date.
    Date(NaiveDate),
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Decimal> for SortValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for SortValue {
    fn from(value: u32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<NaiveDate> for SortValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

/// A status-like tag, matched by display label or variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    /// Display label, e.g. `On Leave`.
    pub label: &'static str,
    /// Variant name, e.g. `OnLeave`.
    pub variant: &'static str,
}

impl Tag {
    /// Whether `wanted` names this tag, ignoring ASCII case.
    pub fn matches(&self, wanted: &str) -> bool {
        let wanted = wanted.trim();
        self.label.eq_ignore_ascii_case(wanted) || self.variant.eq_ignore_ascii_case(wanted)
    }
}

/// Per-entity hooks for [`ListQuery`].
pub trait Listable: Record {
    /// Columns accepted by `sort`.
    const SORT_FIELDS: &'static [&'static str];

    /// Text searched by the free-text box.
    fn search_fields(&self) -> Vec<&str>;

    /// Branch, for records that have one.
    fn branch(&self) -> Option<Branch> {
        None
    }

    /// Classification, for records that have one.
    fn classification(&self) -> Option<Classification> {
        None
    }

    /// Status, for records that have one.
    fn status(&self) -> Option<Tag> {
        None
    }

    /// Value of the `field` column, `None` for unknown columns.
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

/// Page size limits, from the `paging` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PagingConfig {
    /// Page size when the query names none.
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
    /// Largest page size a query may ask for.
    #[serde(default = "default_max_per_page")]
    pub max_per_page: u32,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_per_page: default_per_page(),
            max_per_page: default_max_per_page(),
        }
    }
}

const fn default_per_page() -> u32 {
    20
}

const fn default_max_per_page() -> u32 {
    100
}

/// Toolbar state for one screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive substring to look for.
    pub search: Option<String>,
    /// Branch label (`جدة`) or English variant name (`Jeddah`).
    pub branch: Option<String>,
    /// Classification label or variant name.
    pub classification: Option<String>,
    /// Status label or variant name.
    pub status: Option<String>,
    /// Column to sort by.
    pub sort: Option<String>,
    /// Sort direction.
    pub order: Option<SortOrder>,
    /// 1-based page number.
    pub page: Option<u32>,
    /// Page size, clamped to `1..=max_per_page`.
    pub per_page: Option<u32>,
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Records on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub page: u32,
    /// Page size used.
    pub per_page: u32,
    /// Matching records across all pages.
    pub total: usize,
    /// Number of pages; 0 when nothing matches.
    pub total_pages: u32,
}

impl ListQuery {
    /// Filter, sort and paginate `items`.
    ///
    /// A page past the end yields an empty `items` with the real totals.
    pub fn apply<T: Listable>(&self, items: &[T], paging: PagingConfig) -> Result<Page<T>, QueryError> {
        let branch = self
            .branch
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .map(|b| Branch::from_label(b.trim()).ok_or_else(|| QueryError::UnknownBranch(b.to_owned())))
            .transpose()?;
        let classification = self
            .classification
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(|c| {
                Classification::from_label(c.trim())
                    .ok_or_else(|| QueryError::UnknownClassification(c.to_owned()))
            })
            .transpose()?;
        let status = self.status.as_deref().filter(|s| !s.trim().is_empty());
        let needle = self
            .search
            .as_deref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut matching: Vec<&T> = items
            .iter()
            .filter(|item| branch.is_none_or(|b| item.branch() == Some(b)))
            .filter(|item| classification.is_none_or(|c| item.classification() == Some(c)))
            .filter(|item| status.is_none_or(|s| item.status().is_some_and(|tag| tag.matches(s))))
            .filter(|item| {
                needle.as_deref().is_none_or(|n| {
                    item.search_fields()
                        .iter()
                        .any(|field| field.to_lowercase().contains(n))
                })
            })
            .collect();

        if let Some(field) = self.sort.as_deref().filter(|f| !f.is_empty()) {
            if !T::SORT_FIELDS.contains(&field) {
                return Err(QueryError::UnknownSortField {
                    kind: T::KIND,
                    field: field.to_owned(),
                });
            }
            let descending = self.order.unwrap_or_default() == SortOrder::Desc;
            let mut keyed: Vec<(Option<SortValue>, &T)> = matching
                .into_iter()
                .map(|item| (item.sort_value(field), item))
                .collect();
            keyed.sort_by(|a, b| {
                let ordering = a.0.cmp(&b.0);
                if descending { ordering.reverse() } else { ordering }
            });
            matching = keyed.into_iter().map(|(_, item)| item).collect();
        }

        self.paginate(&matching, paging)
    }

    fn paginate<T: Clone>(&self, matching: &[&T], paging: PagingConfig) -> Result<Page<T>, QueryError> {
        let page = self.page.unwrap_or(1);
        if page == 0 {
            return Err(QueryError::PageOutOfRange);
        }
        let per_page = self
            .per_page
            .unwrap_or(paging.default_per_page)
            .clamp(1, paging.max_per_page.max(1));

        let total = matching.len();
        let per_page_len = usize::try_from(per_page).unwrap_or(usize::MAX);
        let total_pages = u32::try_from(total.div_ceil(per_page_len)).unwrap_or(u32::MAX);
        let skip = usize::try_from(page.saturating_sub(1))
            .unwrap_or(usize::MAX)
            .saturating_mul(per_page_len);

        Ok(Page {
            items: matching
                .iter()
                .skip(skip)
                .take(per_page_len)
                .map(|item| (*item).clone())
                .collect(),
            page,
            per_page,
            total,
            total_pages,
        })
    }
}
