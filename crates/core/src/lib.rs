//! # Shiftboard Core
//!
//! Domain logic for the shiftboard scheduling service: registering care
//! staff and task types, resolving each staff member's effective shift
//! category per date, and placing task blocks on the daily board.
//!
//! The crate is persistence-agnostic. Everything below depends only on the
//! [`repository::ScheduleRepository`] contract; backends plug in behind it.
//!
//! - [`models`] — the persisted entities and the fixed shift-type catalog
//! - [`resolver`] — effective shift category from overlapping signals
//! - [`assignment`] — task-block interval logic and the copy/paste clipboard
//! - [`aggregate`] — per-day and per-month category tallies
//! - [`session`] — the in-memory working set with optimistic persistence

/// Per-day and per-month shift category tallies
pub mod aggregate;
/// Task-block placement, overlap detection, and the clipboard
pub mod assignment;
/// Error types shared across the workspace
pub mod errors;
/// Persisted entities and the shift-type catalog
pub mod models;
/// Persistence contract and the in-memory reference backend
pub mod repository;
/// Effective shift category resolution
pub mod resolver;
/// Facility rules: closure day, staffing minimums, duration step
pub mod rules;
/// Seed data for demos and fresh installations
pub mod seed;
/// In-memory working set with optimistic persistence
pub mod session;
