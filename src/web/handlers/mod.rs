//! Web API request handlers, organized by concern.

pub mod activities;
pub mod health;
