//! ZoomInfo-style Mock Enrichment API Library
//!
//! An in-memory stand-in for a B2B data-enrichment provider: bearer-token
//! authentication, company/contact search with filtering, sorting, paging and
//! field projection, single-record enrich lookups, stubbed bulk jobs, and
//! static field catalogs and usage figures.
//!
//! # Modules
//!
//! - `auth`: Token issuance and the bearer-token middleware.
//! - `bulk`: Stateless bulk-search job responses.
//! - `catalog`: Static field catalogs and usage snapshot.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `fields`: Name-to-accessor tables for records and sort keys.
//! - `filters`: Search criteria to predicate translation.
//! - `handlers`: HTTP request handlers.
//! - `models`: Records, requests and response envelopes.
//! - `pagination`: Page slicing and metadata.
//! - `projection`: Output-field projection.
//! - `query`: Search and enrich pipelines.
//! - `router`: Route table and middleware stack.
//! - `sorting`: Field-based ordering.
//! - `store`: Read-only record store.

pub mod auth;
pub mod bulk;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod fields;
pub mod filters;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod projection;
pub mod query;
pub mod router;
pub mod sorting;
pub mod store;
