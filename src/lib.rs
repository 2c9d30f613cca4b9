//! Vulnwatch - security alert manager
//!
//! Collects open vulnerability findings for every repository in an
//! organization from one or more data sources, merges them concurrently into
//! a single normalized view, and alerts the teams that own the affected
//! repositories.
//!
//! # Modules
//!
//! - [`config`] — Strongly-typed configuration and the reference catalogs
//! - [`domain`] — Normalized findings, project aggregates, and the shared collection
//! - [`application`] — Source orchestration, error types, and reporting
//! - [`infrastructure`] — Concrete vulnerability sources (GitHub)
//! - [`logging`] — Structured logging with tracing

pub mod app;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;

pub use config::Config;
pub use logging::init_tracing;
