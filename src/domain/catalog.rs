use crate::domain::country::Country;

/// Number of countries revealed initially and added by each "load more".
pub const PAGE_INCREMENT: usize = 10;

/// Cap applied to the filtered country list.
///
/// Always a positive multiple of [`PAGE_INCREMENT`]; it starts at one
/// increment and only ever grows by whole increments or resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageSize(usize);

impl PageSize {
    pub fn initial() -> Self {
        Self(PAGE_INCREMENT)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn grow(self) -> Self {
        match self.0.checked_add(PAGE_INCREMENT) {
            Some(next) => Self(next),
            None => self,
        }
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::initial()
    }
}

/// Case-insensitive substring match of `term` against the common name.
/// An empty term matches every country.
pub fn matches(country: &Country, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    country
        .common_name()
        .to_lowercase()
        .contains(&term.to_lowercase())
}

pub fn filtered_count(dataset: &[Country], term: &str) -> usize {
    dataset.iter().filter(|c| matches(c, term)).count()
}

/// The displayed subset: matching countries in dataset order, truncated to
/// the page size.
pub fn derive_view(dataset: &[Country], term: &str, page_size: PageSize) -> Vec<Country> {
    dataset
        .iter()
        .filter(|c| matches(c, term))
        .take(page_size.get())
        .cloned()
        .collect()
}

/// Whether the "Load More" control is offered.
///
/// Compares against the size of the whole dataset, not the number of
/// matches, so with a narrow search the control stays visible and clicking
/// it changes nothing on screen.
pub fn can_load_more(page_size: PageSize, dataset_len: usize) -> bool {
    page_size.get() < dataset_len
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub countries: Vec<Country>,
    pub total_matches: usize,
    pub can_load_more: bool,
}

impl CatalogView {
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// User-driven inputs of the country list: the search term and the page size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    search_term: String,
    page_size: PageSize,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Bound to the text field; pagination is left alone until the user
    /// submits the search.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search(&mut self) {
        self.page_size = PageSize::initial();
    }

    pub fn load_more(&mut self) {
        self.page_size = self.page_size.grow();
    }

    pub fn view(&self, dataset: &[Country]) -> CatalogView {
        CatalogView {
            countries: derive_view(dataset, &self.search_term, self.page_size),
            total_matches: filtered_count(dataset, &self.search_term),
            can_load_more: can_load_more(self.page_size, dataset.len()),
        }
    }
}
