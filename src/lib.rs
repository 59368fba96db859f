//! # vc-finder
//!
//! A single-user session for discovering venture-capital firms by industry,
//! narrowing them with sidebar filters, and keeping a starred shortlist with
//! private notes.
//!
//! ## Architecture
//!
//! ```text
//!              ┌──────────────────────┐
//!              │ Industry + free text │
//!              └──────────┬───────────┘
//!                         │ begin_search (ticket)
//!                         ▼
//!              ┌──────────────────────┐
//!              │   Catalog fetch      │   HTTP url / JSON file
//!              │   (session unlocked) │
//!              └──────────┬───────────┘
//!                         │ complete_search (stale tickets dropped)
//!                         ▼
//!              ┌──────────────────────┐
//!              │ Industry selection   │   vertical substring / Other: no main sector
//!              └──────────┬───────────┘
//!                         │ results
//!                         ▼
//!              ┌──────────────────────┐
//!              │ Sidebar filters      │   stage AND country AND range
//!              └──────────┬───────────┘
//!                         │ filtered view + summary
//!                         ▼
//!       ┌─────────────────┼──────────────────┐
//!       ▼                 ▼                  ▼
//!  ┌──────────┐    ┌─────────────┐    ┌──────────────┐
//!  │Favorites │    │   Notes     │    │Recently seen │
//!  │(starred) │    │(shortlist)  │    │ (newest 5)   │
//!  └────┬─────┘    └──────┬──────┘    └──────┬───────┘
//!       └─────────────────┼──────────────────┘
//!                         ▼
//!              ┌──────────────────────┐
//!              │  Key-value storage   │   favorites / vcNotes / recentlyViewed
//!              └──────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for bind address, data dir, and catalog location
//! - [`models`] - Shared data types: `Firm`, `FirmId`, `SearchStatus`, request/response types
//! - [`catalog`] - Catalog sources (HTTP, file, static) behind the `CatalogSource` trait
//! - [`search::industry`] - Industry enumeration and industry selection
//! - [`search::range`] - Investment-range text classification into fixed buckets
//! - [`search::filter`] - Stage, country, and range sidebar filters
//! - [`search::suggest`] - Autosuggest vocabulary built from catalog verticals
//! - [`store`] - Favorites, notes, and recently viewed, persisted through a key-value store
//! - [`session`] - The search session tying catalog, filters, and collections together
//! - [`api`] - Axum HTTP handlers for search, filters, and firm actions
//! - [`state`] - Shared application state holding config and the session

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod search;
pub mod session;
pub mod state;
pub mod store;
