//! The search session: catalog, filter state and the user actions that drive them.
//!
//! A search is split into [`SearchSession::begin_search`] and
//! [`SearchSession::complete_search`] so the fetch can run without holding the session.
//! Every search takes a new sequence number and only the newest one is applied; a slow,
//! superseded fetch resolving late is dropped.

use std::sync::Arc;

use crate::catalog::{CatalogError, CatalogSource};
use crate::models::{Firm, FirmId, ResultsSummary, ResultsView, SearchStatus};
use crate::search::filter::{Country, FilterState, Stage};
use crate::search::industry::{select_by_industry, Industry};
use crate::search::range::RangeBucket;
use crate::search::suggest::Vocabulary;
use crate::store::favorites::Favorites;
use crate::store::recent::RecentlyViewed;
use crate::store::PersistentCollections;

pub const NO_RESULTS_MESSAGE: &str = "No VCs found for this industry.";
pub const FETCH_FAILED_MESSAGE: &str = "Error fetching VC data. Please try again later.";

/// Handle for one in-flight search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
}

/// Result of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Starred,
    Unstarred,
    /// Logged out: nothing changed, storage untouched.
    Suppressed,
    UnknownFirm,
}

pub struct SearchSession {
    source: Arc<dyn CatalogSource>,
    collections: PersistentCollections,
    catalog: Vec<Firm>,
    vocabulary: Vocabulary,
    results: Vec<Firm>,
    filters: FilterState,
    industry: Industry,
    free_text: String,
    status: SearchStatus,
    issued: u64,
    logged_in: bool,
}

impl SearchSession {
    pub fn new(
        source: Arc<dyn CatalogSource>,
        collections: PersistentCollections,
        logged_in: bool,
    ) -> Self {
        Self {
            source,
            collections,
            catalog: Vec::new(),
            vocabulary: Vocabulary::default(),
            results: Vec::new(),
            filters: FilterState::default(),
            industry: Industry::default(),
            free_text: String::new(),
            status: SearchStatus::Idle,
            issued: 0,
            logged_in,
        }
    }

    pub fn catalog_source(&self) -> Arc<dyn CatalogSource> {
        self.source.clone()
    }

    // ── Search ──────────────────────────────────────────────

    /// Fetch the catalog and build the autosuggest vocabulary from it.
    pub async fn refresh_vocabulary(&mut self) -> Result<usize, CatalogError> {
        let firms = self.source.fetch().await?;
        self.load_vocabulary(&firms);
        Ok(self.vocabulary.len())
    }

    pub fn load_vocabulary(&mut self, firms: &[Firm]) {
        self.vocabulary = Vocabulary::build(firms);
        tracing::debug!("Vocabulary holds {} industry tags", self.vocabulary.len());
    }

    /// Run a whole search: fetch the catalog and narrow it to the industry.
    pub async fn search(&mut self, industry: Industry, free_text: &str) -> &SearchStatus {
        let ticket = self.begin_search(industry, free_text);
        let fetched = self.source.fetch().await;
        self.complete_search(ticket, fetched);
        &self.status
    }

    /// Record the search parameters, clear the previous results and issue a ticket.
    /// Free text only applies to `Other`.
    pub fn begin_search(&mut self, industry: Industry, free_text: &str) -> SearchTicket {
        self.issued += 1;
        self.industry = industry;
        self.free_text = match industry {
            Industry::Other => free_text.trim().to_string(),
            _ => String::new(),
        };
        self.results.clear();
        self.status = SearchStatus::Loading;
        tracing::debug!("Search #{} started for {industry}", self.issued);
        SearchTicket { seq: self.issued }
    }

    /// Apply a fetch outcome. Returns false, changing nothing, if a newer search was started.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        fetched: Result<Vec<Firm>, CatalogError>,
    ) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                "Dropping superseded search #{} (latest is #{})",
                ticket.seq,
                self.issued
            );
            return false;
        }

        match fetched {
            Ok(firms) => {
                if self.vocabulary.is_empty() {
                    self.load_vocabulary(&firms);
                }
                self.results = select_by_industry(&firms, self.industry, &self.free_text);
                self.catalog = firms;
                self.status = if self.results.is_empty() {
                    SearchStatus::NoResults(NO_RESULTS_MESSAGE.to_string())
                } else {
                    SearchStatus::Ready
                };
                tracing::info!(
                    "Search {}: {} of {} firms match",
                    self.industry,
                    self.results.len(),
                    self.catalog.len()
                );
            }
            Err(e) => {
                tracing::warn!("Catalog fetch failed: {e}");
                self.results.clear();
                self.status = SearchStatus::Failed(FETCH_FAILED_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn industry(&self) -> Industry {
        self.industry
    }

    pub fn free_text(&self) -> &str {
        &self.free_text
    }

    /// Industry-selected firms before sidebar filtering.
    pub fn results(&self) -> &[Firm] {
        &self.results
    }

    /// Industry-selected firms that pass every sidebar filter, in catalog order.
    pub fn filtered(&self) -> Vec<&Firm> {
        self.results
            .iter()
            .filter(|f| self.filters.matches(f))
            .collect()
    }

    /// Autosuggest is only offered while typing a custom (`Other`) industry.
    pub fn suggest(&self, industry: Industry, partial: &str) -> Vec<String> {
        match industry {
            Industry::Other => self.vocabulary.suggest(partial),
            _ => Vec::new(),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    // ── Filters ─────────────────────────────────────────────

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn toggle_stage_filter(&mut self, stage: Stage) -> bool {
        self.filters.stages.toggle(stage)
    }

    pub fn toggle_country_filter(&mut self, country: Country) -> bool {
        self.filters.countries.toggle(country)
    }

    pub fn toggle_range_filter(&mut self, range: RangeBucket) -> bool {
        self.filters.ranges.toggle(range)
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary {
            count: self.filtered().len(),
            industry: self.industry.label().to_string(),
            stages: labels(self.filters.stages.iter().map(Stage::label)),
            countries: labels(self.filters.countries.iter().map(Country::label)),
            ranges: labels(self.filters.ranges.iter().map(RangeBucket::label)),
            has_active_filters: !self.filters.is_empty(),
        }
    }

    pub fn view(&self) -> ResultsView {
        ResultsView {
            status: self.status.clone(),
            results: self.filtered().into_iter().cloned().collect(),
            summary: self.summary(),
        }
    }

    // ── Firm actions ────────────────────────────────────────

    /// Open a firm's details, recording it as recently viewed.
    pub fn select_firm(&mut self, id: &FirmId) -> Option<Firm> {
        let firm = self.find_firm(id)?;
        self.collections.record_view(firm.clone());
        tracing::debug!("Viewed firm {id}");
        Some(firm)
    }

    pub fn toggle_favorite(&mut self, id: &FirmId) -> FavoriteToggle {
        if !self.logged_in {
            return FavoriteToggle::Suppressed;
        }
        let Some(firm) = self.find_firm(id) else {
            return FavoriteToggle::UnknownFirm;
        };
        if self.collections.toggle_favorite(&firm) {
            FavoriteToggle::Starred
        } else {
            FavoriteToggle::Unstarred
        }
    }

    pub fn is_favorite(&self, id: &FirmId) -> bool {
        self.collections.favorites().contains(id)
    }

    /// Notes can only be edited on shortlisted firms. Returns whether the note was stored.
    pub fn set_note(&mut self, id: &FirmId, text: &str) -> bool {
        if !self.is_favorite(id) {
            return false;
        }
        self.collections.set_note(id, text);
        true
    }

    pub fn note(&self, id: &FirmId) -> Option<&str> {
        self.collections.notes().get(id)
    }

    pub fn favorites(&self) -> &Favorites {
        self.collections.favorites()
    }

    pub fn recently_viewed(&self) -> &RecentlyViewed {
        self.collections.recent()
    }

    // ── Login stub ──────────────────────────────────────────

    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Logging in re-reads the stored shortlist.
    pub fn set_logged_in(&mut self, logged_in: bool) {
        if logged_in && !self.logged_in {
            self.collections.reload_favorites();
        }
        self.logged_in = logged_in;
        tracing::info!("Logged in: {logged_in}");
    }

    /// Catalog first, then the shortlist, then history.
    fn find_firm(&self, id: &FirmId) -> Option<Firm> {
        self.catalog
            .iter()
            .find(|f| &f.id == id)
            .or_else(|| self.collections.favorites().get(id))
            .or_else(|| self.collections.recent().get(id))
            .cloned()
    }
}

fn labels<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values.map(str::to_string).collect()
}
