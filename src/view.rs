//! Directory view state and reducer.
//!
//! Holds the loaded company list together with the search text, the two
//! selector values and the current page. All changes go through
//! [`ViewState::reduce`], and everything the UI draws is derived from
//! [`ViewState::page_view`].

use crate::directory::{Company, LoadOutcome};

/// Number of companies shown per page.
pub const PAGE_SIZE: usize = 5;

/// Input that changes the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Search text was edited
    SearchChanged(String),
    /// Location selector changed (`""` = all)
    LocationChanged(String),
    /// Industry selector changed (`""` = all)
    IndustryChanged(String),
    /// "Next" was pressed
    NextPage,
    /// "Previous" was pressed
    PreviousPage,
    /// A load attempt finished
    Loaded(LoadOutcome),
}

/// State of the directory view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Full company list, replaced wholesale on every successful load
    pub companies: Vec<Company>,
    /// Free-text search
    pub search_text: String,
    /// Location selector value
    pub location_filter: String,
    /// Industry selector value
    pub industry_filter: String,
    /// One-based page number
    pub current_page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            companies: Vec::new(),
            search_text: String::new(),
            location_filter: String::new(),
            industry_filter: String::new(),
            current_page: 1,
        }
    }
}

/// Everything needed to draw one page of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Rows on this page, paired with their display key (id, or position on the page)
    pub rows: Vec<(String, &'a Company)>,
    /// One-based page number
    pub current_page: usize,
    /// Total number of pages (0 when nothing matches)
    pub total_pages: usize,
    /// Number of companies that passed the filters
    pub filtered_count: usize,
    /// Whether "Previous" is enabled
    pub has_previous: bool,
    /// Whether "Next" is enabled
    pub has_next: bool,
}

impl ViewState {
    /// Apply an event and return the new state.
    ///
    /// # Arguments
    /// * `event` - Event to apply
    ///
    /// # Returns
    /// * `ViewState` - State after the event
    ///
    /// # Details
    /// Any change to the search text or a selector resets the page to 1.
    /// Page navigation is ignored when the matching button is disabled.
    /// A failed load leaves the state untouched.
    pub fn reduce(mut self, event: ViewEvent) -> Self {
        match event {
            ViewEvent::SearchChanged(text) => {
                if text != self.search_text {
                    self.search_text = text;
                    self.current_page = 1;
                }
            }
            ViewEvent::LocationChanged(location) => {
                if location != self.location_filter {
                    self.location_filter = location;
                    self.current_page = 1;
                }
            }
            ViewEvent::IndustryChanged(industry) => {
                if industry != self.industry_filter {
                    self.industry_filter = industry;
                    self.current_page = 1;
                }
            }
            ViewEvent::NextPage => {
                if has_next(self.current_page, self.total_pages()) {
                    self.current_page += 1;
                }
            }
            ViewEvent::PreviousPage => {
                if has_previous(self.current_page) {
                    self.current_page -= 1;
                }
            }
            ViewEvent::Loaded(LoadOutcome::Loaded(companies)) => {
                self.companies = companies;
                self.current_page = 1;
            }
            ViewEvent::Loaded(LoadOutcome::Failed(_)) => {}
        }
        self
    }

    /// Companies that pass the current search and selectors, in list order.
    pub fn filtered(&self) -> Vec<&Company> {
        filter_companies(
            &self.companies,
            &self.search_text,
            &self.location_filter,
            &self.industry_filter,
        )
    }

    /// Number of pages for the current filters.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len())
    }

    /// Build the page the UI should draw.
    pub fn page_view(&self) -> PageView<'_> {
        let filtered = self.filtered();
        let total_pages = total_pages(filtered.len());
        let rows = paginate(&filtered, self.current_page)
            .iter()
            .enumerate()
            .map(|(index, company)| (company.display_key(index), *company))
            .collect();

        PageView {
            rows,
            current_page: self.current_page,
            total_pages,
            filtered_count: filtered.len(),
            has_previous: has_previous(self.current_page),
            has_next: has_next(self.current_page, total_pages),
        }
    }
}

/// Check whether a company passes all filter predicates.
///
/// # Arguments
/// * `company` - Company to test
/// * `search_text` - Free-text search, matched as a case-insensitive substring
/// * `location_filter` - Location, matched case-insensitively (`""` = any)
/// * `industry_filter` - Industry, matched case-insensitively (`""` = any)
///
/// # Returns
/// * `bool` - Whether the company should be shown
///
/// # Details
/// Companies missing a name, location or industry never match.
pub fn matches(
    company: &Company,
    search_text: &str,
    location_filter: &str,
    industry_filter: &str,
) -> bool {
    if !company.is_complete() {
        return false;
    }

    let text = search_text.to_lowercase();
    let text_match = company.name().to_lowercase().contains(&text)
        || company.location().to_lowercase().contains(&text)
        || company.industry().to_lowercase().contains(&text);

    let location_match = location_filter.is_empty()
        || company.location().to_lowercase() == location_filter.to_lowercase();

    let industry_match = industry_filter.is_empty()
        || company.industry().to_lowercase() == industry_filter.to_lowercase();

    text_match && location_match && industry_match
}

/// Filter a company list, preserving order.
pub fn filter_companies<'a>(
    companies: &'a [Company],
    search_text: &str,
    location_filter: &str,
    industry_filter: &str,
) -> Vec<&'a Company> {
    companies
        .iter()
        .filter(|company| matches(company, search_text, location_filter, industry_filter))
        .collect()
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PAGE_SIZE)
}

/// Slice out a one-based page.
///
/// Pages past the end yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

fn has_previous(current_page: usize) -> bool {
    current_page > 1
}

fn has_next(current_page: usize, total_pages: usize) -> bool {
    total_pages > 0 && current_page < total_pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::models::CompanyId;

    fn acme_and_globex() -> Vec<Company> {
        vec![
            Company::new("Acme", "USA", "Technology"),
            Company::new("Globex", "India", "Finance"),
        ]
    }

    fn numbered(count: usize) -> Vec<Company> {
        (1..=count)
            .map(|n| Company::new(&format!("Company {}", n), "UK", "Healthcare"))
            .collect()
    }

    fn mixed() -> Vec<Company> {
        vec![
            Company::new("Acme", "USA", "Technology"),
            Company::new("Globex", "India", "Finance"),
            Company::new("Initech", "usa", "finance"),
            Company::new("Umbrella", "Germany", "Healthcare"),
            Company::new("Shopfront", "UK", "E-commerce"),
            Company {
                name: None,
                ..Company::new("", "USA", "Technology")
            },
            Company {
                location: Some(String::new()),
                ..Company::new("Hooli", "USA", "Technology")
            },
            Company {
                industry: None,
                ..Company::new("Vandelay", "UK", "Finance")
            },
        ]
    }

    fn loaded(companies: Vec<Company>) -> ViewState {
        ViewState::default().reduce(ViewEvent::Loaded(LoadOutcome::Loaded(companies)))
    }

    fn names(companies: &[&Company]) -> Vec<String> {
        companies.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn test_view_state_default() {
        let state = ViewState::default();
        assert!(state.companies.is_empty());
        assert!(state.search_text.is_empty());
        assert!(state.location_filter.is_empty());
        assert!(state.industry_filter.is_empty());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_incomplete_records_never_match() {
        let companies = mixed();
        for search in ["", "a", "usa", "tech", "finance", "uk"] {
            for location in ["", "USA", "UK"] {
                for industry in ["", "Technology", "Finance"] {
                    let result = filter_companies(&companies, search, location, industry);
                    assert!(result.iter().all(|c| c.is_complete()));
                }
            }
        }
    }

    #[test]
    fn test_search_matches_any_field_case_insensitively() {
        let companies = mixed();
        for search in ["ACME", "india", "Finance", "e-COM", "an"] {
            let result = filter_companies(&companies, search, "", "");
            assert!(!result.is_empty(), "no match for {}", search);
            let needle = search.to_lowercase();
            for company in result {
                assert!(
                    company.name().to_lowercase().contains(&needle)
                        || company.location().to_lowercase().contains(&needle)
                        || company.industry().to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_empty_search_matches_all_complete_records() {
        let companies = mixed();
        let result = filter_companies(&companies, "", "", "");
        assert_eq!(
            names(&result),
            vec!["Acme", "Globex", "Initech", "Umbrella", "Shopfront"]
        );
    }

    #[test]
    fn test_location_filter_is_case_insensitive_equality() {
        let companies = mixed();
        let result = filter_companies(&companies, "", "USA", "");
        assert_eq!(names(&result), vec!["Acme", "Initech"]);
        for company in &result {
            assert_eq!(company.location().to_lowercase(), "usa");
        }
    }

    #[test]
    fn test_filters_combine_with_and() {
        let companies = mixed();
        let result = filter_companies(&companies, "", "USA", "Finance");
        assert_eq!(names(&result), vec!["Initech"]);

        let result = filter_companies(&companies, "acme", "USA", "Finance");
        assert!(result.is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
        assert_eq!(total_pages(12), 3);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<usize> = (1..=12).collect();
        assert_eq!(paginate(&items, 1), &[1, 2, 3, 4, 5]);
        assert_eq!(paginate(&items, 3), &[11, 12]);
        assert!(paginate(&items, 4).is_empty());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut state = loaded(numbered(12));
        state = state.reduce(ViewEvent::NextPage).reduce(ViewEvent::NextPage);
        assert_eq!(state.current_page, 3);

        let state = state.reduce(ViewEvent::SearchChanged("company".to_string()));
        assert_eq!(state.current_page, 1);

        let state = state
            .reduce(ViewEvent::NextPage)
            .reduce(ViewEvent::LocationChanged("UK".to_string()));
        assert_eq!(state.current_page, 1);

        let state = state
            .reduce(ViewEvent::NextPage)
            .reduce(ViewEvent::IndustryChanged("Healthcare".to_string()));
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let state = loaded(numbered(12))
            .reduce(ViewEvent::NextPage)
            .reduce(ViewEvent::SearchChanged(String::new()));
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn test_scenario_no_filters() {
        let state = loaded(acme_and_globex());
        let page = state.page_view();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.current_page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_previous);
        assert!(!page.has_next);
    }

    #[test]
    fn test_scenario_location_india() {
        let state = loaded(acme_and_globex()).reduce(ViewEvent::LocationChanged("India".to_string()));
        let page = state.page_view();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].1.name(), "Globex");
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_scenario_twelve_records() {
        let state = loaded(numbered(12));
        let page = state.page_view();
        assert_eq!(page.total_pages, 3);
        let shown: Vec<&str> = page.rows.iter().map(|(_, c)| c.name()).collect();
        assert_eq!(
            shown,
            vec!["Company 1", "Company 2", "Company 3", "Company 4", "Company 5"]
        );

        let state = state.reduce(ViewEvent::NextPage).reduce(ViewEvent::NextPage);
        let page = state.page_view();
        assert_eq!(page.current_page, 3);
        let shown: Vec<&str> = page.rows.iter().map(|(_, c)| c.name()).collect();
        assert_eq!(shown, vec!["Company 11", "Company 12"]);
        assert!(!page.has_next);
        assert!(page.has_previous);

        // Next is disabled on the last page.
        let state = state.reduce(ViewEvent::NextPage);
        assert_eq!(state.current_page, 3);
    }

    #[test]
    fn test_scenario_no_match() {
        let state = loaded(acme_and_globex()).reduce(ViewEvent::SearchChanged("zzz".to_string()));
        let page = state.page_view();
        assert!(page.rows.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.filtered_count, 0);
        assert!(!page.has_previous);
        assert!(!page.has_next);

        let state = state.reduce(ViewEvent::NextPage).reduce(ViewEvent::PreviousPage);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_row_keys_use_id_or_position() {
        let companies = vec![
            Company::new("Acme", "USA", "Technology").with_id(CompanyId::Text("acme".to_string())),
            Company::new("Globex", "India", "Finance"),
        ];
        let state = loaded(companies);
        let page = state.page_view();
        assert_eq!(page.rows[0].0, "acme");
        assert_eq!(page.rows[1].0, "1");

        // Positions restart on every page.
        let state = loaded(numbered(7)).reduce(ViewEvent::NextPage);
        let page = state.page_view();
        assert_eq!(page.rows[0].0, "0");
        assert_eq!(page.rows[1].0, "1");

        let blank = vec![
            Company::new("Acme", "USA", "Technology").with_id(CompanyId::Number(0.into())),
            Company::new("Globex", "India", "Finance").with_id(CompanyId::Text(String::new())),
        ];
        let app = loaded(blank);
        let page = app.page_view();
        assert_eq!(page.rows[0].0, "0");
        assert_eq!(page.rows[1].0, "1");
    }

    #[test]
    fn test_load_replaces_list_and_resets_page() {
        let state = loaded(numbered(12)).reduce(ViewEvent::NextPage);
        assert_eq!(state.current_page, 2);

        let state = state.reduce(ViewEvent::Loaded(LoadOutcome::Loaded(acme_and_globex())));
        assert_eq!(state.companies, acme_and_globex());
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn test_failed_load_keeps_state() {
        let state = ViewState::default()
            .reduce(ViewEvent::Loaded(LoadOutcome::Failed("connection refused".to_string())));
        assert_eq!(state, ViewState::default());
        assert!(state.page_view().rows.is_empty());

        let before = loaded(acme_and_globex());
        let after = before
            .clone()
            .reduce(ViewEvent::Loaded(LoadOutcome::Failed("timeout".to_string())));
        assert_eq!(before, after);
    }
}
