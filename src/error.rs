//! # Structured Error Handling
//!
//! Core error taxonomy for roster operations. Every failure is detected
//! synchronously, scoped to a single operation, and leaves the rest of the
//! roster untouched. The web layer maps these kinds onto HTTP statuses.

use thiserror::Error;

/// Failures produced by roster operations.
///
/// Each variant carries enough context (activity name, email) to render a
/// human-readable detail message for logging or display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The referenced activity does not exist in the roster.
    #[error("Activity not found: {activity}")]
    ActivityNotFound { activity: String },

    /// Duplicate registration attempt for the same activity.
    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    /// Unregister attempt for an email that is not a participant.
    #[error("{email} is not registered for {activity}")]
    NotRegistered { email: String, activity: String },

    /// Registration attempt against an activity at capacity.
    /// Only produced when capacity enforcement is enabled.
    #[error("{activity} is full ({max_participants} participants max)")]
    ActivityFull {
        activity: String,
        max_participants: u32,
    },
}

impl RosterError {
    pub fn activity_not_found(activity: impl Into<String>) -> Self {
        Self::ActivityNotFound {
            activity: activity.into(),
        }
    }

    pub fn already_registered(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self::AlreadyRegistered {
            email: email.into(),
            activity: activity.into(),
        }
    }

    pub fn not_registered(email: impl Into<String>, activity: impl Into<String>) -> Self {
        Self::NotRegistered {
            email: email.into(),
            activity: activity.into(),
        }
    }
}

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;
