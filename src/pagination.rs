//! Counting the items of a paged GitHub listing with at most two requests.
//!
//! GitHub advertises the final page of a listing in its `Link` header
//! (`<...&page=N>; rel="last"`). Every page before the last one is assumed to be
//! full, so only the last page has to be fetched to know the total.

use crate::client::{ApiClient, ApiResponse, HeaderVisitor};
use regex::Regex;
use serde::de::IgnoredAny;
use std::sync::LazyLock;

/// Page size requested explicitly so the API's own default cannot skew the arithmetic.
pub const ITEMS_PER_PAGE: u64 = 30;

static LAST_PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"page=([0-9]+)>; rel="last""#).expect("last-page pattern is valid")
});

/// Last-page bookkeeping for a single listing request.
///
/// `last_page` is `0` before any header is seen, `-1` while no last-page marker
/// has been found, and the advertised page number once one has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationState {
    last_page: i64,
    link_found: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_page(&self) -> i64 {
        self.last_page
    }

    pub fn link_found(&self) -> bool {
        self.link_found
    }
}

impl HeaderVisitor for PaginationState {
    fn visit(&mut self, line: &str) {
        let page = LAST_PAGE_MARKER
            .captures(line)
            .and_then(|captures| captures[1].parse::<i64>().ok());

        match page {
            Some(page) => {
                self.last_page = page;
                self.link_found = true;
            }
            // Headers arrive in no particular order; a marker already seen must survive.
            None if !self.link_found => self.last_page = -1,
            None => {}
        }
    }
}

/// Returns the total number of items behind `listing_url`.
///
/// `listing_url` must already carry a query string (`per_page` at least), since
/// the last page is requested by appending `&page=N`.
pub async fn count_items<C: ApiClient>(client: &C, listing_url: &str) -> u64 {
    let mut state = PaginationState::new();

    let first_page = client.get(listing_url).await;
    first_page.visit_headers(&mut state);

    if state.last_page() <= 0 {
        let count = page_len(&first_page);
        tracing::debug!(listing_url, count, "Listing fits on a single page");
        return count;
    }

    let last_page = state.last_page() as u64;
    let last_page_response = client
        .get(&format!("{listing_url}&page={last_page}"))
        .await;
    let count = listing_total(last_page, page_len(&last_page_response));

    tracing::debug!(listing_url, last_page, count, "Counted paginated listing");
    count
}

/// Items across `last_page` pages when all but the last are full.
/// Saturates on absurd page numbers.
fn listing_total(last_page: u64, last_page_items: u64) -> u64 {
    last_page
        .saturating_sub(1)
        .saturating_mul(ITEMS_PER_PAGE)
        .saturating_add(last_page_items)
}

/// Number of elements in a JSON array body; anything else counts as empty.
fn page_len(response: &ApiResponse) -> u64 {
    response
        .json::<Vec<IgnoredAny>>()
        .map_or(0, |items| items.len() as u64)
}
