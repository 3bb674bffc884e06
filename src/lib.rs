//! Project, task, and team tracking on an embedded SQLite store.
//!
//! [`db::Database`] owns the schema and exposes create/update/list/get for each
//! entity plus the derived views a dashboard renders: upcoming deadlines,
//! workload per member, status distribution, timelines, and a naive
//! completion estimate.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schedule;

pub use db::Database;
pub use error::{StoreError, StoreResult};
