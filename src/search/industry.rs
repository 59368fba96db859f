use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::Firm;

/// Industry picker options: the twelve main sectors plus `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    #[default]
    Fintech,
    Edtech,
    SaaS,
    AI,
    Automotive,
    #[serde(rename = "E-commerce")]
    ECommerce,
    Fashion,
    Media,
    Biotech,
    Healthcare,
    Consumer,
    Mobility,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 13] = [
        Industry::Fintech,
        Industry::Edtech,
        Industry::SaaS,
        Industry::AI,
        Industry::Automotive,
        Industry::ECommerce,
        Industry::Fashion,
        Industry::Media,
        Industry::Biotech,
        Industry::Healthcare,
        Industry::Consumer,
        Industry::Mobility,
        Industry::Other,
    ];

    /// Every option except `Other`.
    pub const MAIN_SECTORS: [Industry; 12] = [
        Industry::Fintech,
        Industry::Edtech,
        Industry::SaaS,
        Industry::AI,
        Industry::Automotive,
        Industry::ECommerce,
        Industry::Fashion,
        Industry::Media,
        Industry::Biotech,
        Industry::Healthcare,
        Industry::Consumer,
        Industry::Mobility,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Fintech => "Fintech",
            Industry::Edtech => "Edtech",
            Industry::SaaS => "SaaS",
            Industry::AI => "AI",
            Industry::Automotive => "Automotive",
            Industry::ECommerce => "E-commerce",
            Industry::Fashion => "Fashion",
            Industry::Media => "Media",
            Industry::Biotech => "Biotech",
            Industry::Healthcare => "Healthcare",
            Industry::Consumer => "Consumer",
            Industry::Mobility => "Mobility",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Industry::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown industry: {s}"))
    }
}

/// Narrow the fetched catalog to one industry.
///
/// - named sector: some vertical contains the sector name, ignoring case
///   ("Fintech" matches "B2B Fintech")
/// - `Other` with text: some vertical contains the text, ignoring case
/// - `Other` without text: no vertical equals a main sector name, ignoring case
pub fn select_by_industry(firms: &[Firm], industry: Industry, free_text: &str) -> Vec<Firm> {
    let free_text = free_text.trim();

    match industry {
        Industry::Other if free_text.is_empty() => firms
            .iter()
            .filter(|f| !f.verticals.iter().any(|v| is_main_sector(v)))
            .cloned()
            .collect(),
        Industry::Other => filter_by_vertical_substring(firms, free_text),
        named => filter_by_vertical_substring(firms, named.label()),
    }
}

fn filter_by_vertical_substring(firms: &[Firm], needle: &str) -> Vec<Firm> {
    let needle = needle.to_lowercase();
    firms
        .iter()
        .filter(|f| {
            f.verticals
                .iter()
                .any(|v| v.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

fn is_main_sector(vertical: &str) -> bool {
    let vertical = vertical.to_lowercase();
    Industry::MAIN_SECTORS
        .iter()
        .any(|s| s.label().to_lowercase() == vertical)
}
