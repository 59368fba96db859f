use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Firm;
use crate::search::range::RangeBucket;

/// Funding stage checkbox options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    #[serde(rename = "Pre-Seed")]
    PreSeed,
    Seed,
    #[serde(rename = "Pre-Series A")]
    PreSeriesA,
    #[serde(rename = "Series A")]
    SeriesA,
    #[serde(rename = "Series B")]
    SeriesB,
    Growth,
    Late,
}

impl Stage {
    pub const ALL: [Stage; 7] = [
        Stage::PreSeed,
        Stage::Seed,
        Stage::PreSeriesA,
        Stage::SeriesA,
        Stage::SeriesB,
        Stage::Growth,
        Stage::Late,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::PreSeed => "Pre-Seed",
            Stage::Seed => "Seed",
            Stage::PreSeriesA => "Pre-Series A",
            Stage::SeriesA => "Series A",
            Stage::SeriesB => "Series B",
            Stage::Growth => "Growth",
            Stage::Late => "Late",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Stage::ALL
            .into_iter()
            .find(|stage| stage.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown stage: {s}"))
    }
}

/// Country class derived from a firm's free-text location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    India,
    Global,
}

impl Country {
    pub const ALL: [Country; 2] = [Country::India, Country::Global];

    pub fn label(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Global => "Global",
        }
    }

    /// `India` when the location mentions it (case-sensitive), `Global` otherwise.
    pub fn of_location(location: Option<&str>) -> Self {
        if location.unwrap_or_default().contains("India") {
            Country::India
        } else {
            Country::Global
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Country::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown country: {s}"))
    }
}

/// Checkbox group: a set that remembers the order values were checked in.
/// An empty set places no constraint on its dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSet<T> {
    values: Vec<T>,
}

impl<T> Default for FilterSet<T> {
    fn default() -> Self {
        Self { values: Vec::new() }
    }
}

impl<T: Copy + PartialEq> FilterSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the value if unchecked, uncheck it otherwise. Returns whether it is now checked.
    pub fn toggle(&mut self, value: T) -> bool {
        if let Some(pos) = self.values.iter().position(|v| *v == value) {
            self.values.remove(pos);
            false
        } else {
            self.values.push(value);
            true
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Empty set accepts anything; otherwise the value must be checked.
    fn admits(&self, value: &T) -> bool {
        self.is_empty() || self.contains(value)
    }
}

impl<T: Copy + PartialEq> FromIterator<T> for FilterSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = FilterSet::new();
        for value in iter {
            if !set.contains(&value) {
                set.values.push(value);
            }
        }
        set
    }
}

/// The three sidebar filter groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub stages: FilterSet<Stage>,
    pub countries: FilterSet<Country>,
    pub ranges: FilterSet<RangeBucket>,
}

impl FilterState {
    pub fn matches(&self, firm: &Firm) -> bool {
        matches(firm, &self.stages, &self.countries, &self.ranges)
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty() && self.countries.is_empty() && self.ranges.is_empty()
    }

    pub fn clear(&mut self) {
        self.stages.clear();
        self.countries.clear();
        self.ranges.clear();
    }
}

/// Any checked stage label occurring in the firm's stage text. `Seed` matches `Pre-Seed`.
pub fn stage_match(firm: &Firm, stages: &FilterSet<Stage>) -> bool {
    let stage = firm.stage.as_deref().unwrap_or_default();
    stages.is_empty() || stages.iter().any(|s| stage.contains(s.label()))
}

pub fn country_match(firm: &Firm, countries: &FilterSet<Country>) -> bool {
    countries.admits(&firm.country())
}

pub fn range_match(firm: &Firm, ranges: &FilterSet<RangeBucket>) -> bool {
    ranges.admits(&firm.range_bucket())
}

/// AND across the three groups, OR within each group.
pub fn matches(
    firm: &Firm,
    stages: &FilterSet<Stage>,
    countries: &FilterSet<Country>,
    ranges: &FilterSet<RangeBucket>,
) -> bool {
    stage_match(firm, stages) && country_match(firm, countries) && range_match(firm, ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FirmId;

    fn make_firm(stage: Option<&str>, location: Option<&str>, range: Option<&str>) -> Firm {
        Firm {
            id: FirmId::Number(1),
            name: "Test Capital".to_string(),
            location: location.map(str::to_string),
            verticals: vec!["Fintech".to_string()],
            investment_range: range.map(str::to_string),
            stage: stage.map(str::to_string),
            email: None,
            website: None,
            notable_investments: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let state = FilterState::default();
        assert!(state.matches(&make_firm(None, None, None)));
        assert!(state.matches(&make_firm(Some("Late"), Some("Delhi, India"), Some("$50M"))));
    }

    #[test]
    fn test_stage_is_substring_match() {
        let firm = make_firm(Some("Pre-Seed, Seed"), None, None);
        let seed: FilterSet<Stage> = [Stage::Seed].into_iter().collect();
        assert!(stage_match(&firm, &seed));

        let pre_seed_only = make_firm(Some("Pre-Seed"), None, None);
        assert!(stage_match(&pre_seed_only, &seed));

        let series_b: FilterSet<Stage> = [Stage::SeriesB].into_iter().collect();
        assert!(!stage_match(&pre_seed_only, &series_b));
    }

    #[test]
    fn test_stage_match_is_case_sensitive_and_handles_missing_stage() {
        let firm = make_firm(Some("seed"), None, None);
        let seed: FilterSet<Stage> = [Stage::Seed].into_iter().collect();
        assert!(!stage_match(&firm, &seed));
        assert!(!stage_match(&make_firm(None, None, None), &seed));
    }

    #[test]
    fn test_stage_group_is_or() {
        let firm = make_firm(Some("Growth"), None, None);
        let set: FilterSet<Stage> = [Stage::Seed, Stage::Growth].into_iter().collect();
        assert!(stage_match(&firm, &set));
    }

    #[test]
    fn test_country_derivation() {
        assert_eq!(Country::of_location(Some("Bengaluru, India")), Country::India);
        assert_eq!(Country::of_location(Some("San Francisco, USA")), Country::Global);
        assert_eq!(Country::of_location(Some("india")), Country::Global);
        assert_eq!(Country::of_location(None), Country::Global);
    }

    #[test]
    fn test_dimensions_are_anded() {
        let firm = make_firm(Some("Series A"), Some("Mumbai, India"), Some("$2M"));
        let stages: FilterSet<Stage> = [Stage::SeriesA].into_iter().collect();
        let india: FilterSet<Country> = [Country::India].into_iter().collect();
        let global: FilterSet<Country> = [Country::Global].into_iter().collect();
        let small: FilterSet<RangeBucket> = [RangeBucket::From500KTo2M].into_iter().collect();
        let large: FilterSet<RangeBucket> = [RangeBucket::Over10M].into_iter().collect();

        assert!(matches(&firm, &stages, &india, &small));
        assert!(!matches(&firm, &stages, &global, &small));
        assert!(!matches(&firm, &stages, &india, &large));
        assert!(matches(&firm, &FilterSet::new(), &india, &FilterSet::new()));
    }

    #[test]
    fn test_toggle_keeps_check_order_and_removes() {
        let mut set = FilterSet::new();
        assert!(set.toggle(Stage::Late));
        assert!(set.toggle(Stage::Seed));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![Stage::Late, Stage::Seed]);
        assert!(!set.toggle(Stage::Late));
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![Stage::Seed]);
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("Pre-Series A".parse::<Stage>().unwrap(), Stage::PreSeriesA);
        assert_eq!("global".parse::<Country>().unwrap(), Country::Global);
        assert!("Series Z".parse::<Stage>().is_err());
        assert!("Mars".parse::<Country>().is_err());
    }
}
