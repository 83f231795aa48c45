#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Mergington Activities
//!
//! In-memory roster service for Mergington High School's extracurricular
//! activities and student sign-ups.
//!
//! ## Overview
//!
//! The core of the crate is the [`roster`] module: a catalog of activities,
//! each with a capacity and an ordered list of registered participant
//! emails, plus the mutation rules (duplicate-registration prevention,
//! existence checks, optional capacity enforcement). Everything else is a
//! thin transport shell — an axum web API and a static single-page UI.
//!
//! ## Module Organization
//!
//! - [`roster`] - Activity catalog and the register/unregister operations
//! - [`error`] - Structured error handling
//! - [`config`] - Layered configuration management
//! - [`logging`] - Tracing initialization
//! - [`web`] - HTTP surface (routes, handlers, shared state)
//!
//! ## Quick Start
//!
//! ```rust
//! use mergington_activities::roster::Roster;
//!
//! let mut roster = Roster::seeded(true);
//! roster.register("Chess Club", "student@mergington.edu")?;
//!
//! let chess = roster.get("Chess Club").unwrap();
//! assert!(chess.is_registered("student@mergington.edu"));
//! # Ok::<(), mergington_activities::RosterError>(())
//! ```
//!
//! State lives for the life of the process; a restart resets the roster to
//! the seed catalog.

pub mod config;
pub mod error;
pub mod logging;
pub mod roster;
pub mod web;

pub use config::ActivitiesConfig;
pub use error::{Result, RosterError};
pub use roster::{Activity, Roster};
