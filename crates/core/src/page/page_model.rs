use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::catalog::PackageDetail;
use crate::pricing::{PackageOption, PriceTag};

/// Everything the embedding needs to paint the page at load time.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageRender {
    /// Value for the currency selector; `None` leaves the placeholder.
    pub selector_value: Option<String>,
    pub price_tags: Vec<PriceTag>,
    pub package_options: Vec<PackageOption>,
    /// Detail section content, present when a package is selected.
    pub package_detail: Option<PackageDetail>,
    /// Message text seeded from the selected package, if any.
    pub seeded_message: Option<String>,
}

/// Re-rendered price content after a preference change.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PriceRefresh {
    pub price_tags: Vec<PriceTag>,
    pub package_options: Vec<PackageOption>,
    pub package_detail: Option<PackageDetail>,
}

/// Mobile navigation state behind the `#navToggle` button.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

/// Footer year stamp (the `data-year` behavior).
pub fn year_stamp(now: DateTime<Utc>) -> i32 {
    now.year()
}

/// Extracts a single parameter from a raw query string. Read once at
/// page load; keys and the package slugs it carries need no decoding.
pub fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        (k == key).then_some(v)
    })
}
