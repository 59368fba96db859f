//! Catalog narrowing: industry pre-filter, sidebar filters, range buckets and autosuggest.

pub mod filter;
pub mod industry;
pub mod range;
pub mod suggest;
