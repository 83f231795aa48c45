//! # Activity Roster
//!
//! Owns the mapping from activity name to [`Activity`] and provides the three
//! core operations: list, register, unregister. All mutation flows through
//! [`Roster::register`] and [`Roster::unregister`], which uphold the roster
//! invariants:
//!
//! - no duplicate email within one activity's participants (case-sensitive);
//! - `participants.len() <= max_participants` while capacity enforcement is
//!   enabled;
//! - activity names are unique roster keys.
//!
//! The catalog is seeded once at process start and never changes shape at
//! runtime; only each activity's participant list mutates. State is not
//! persisted, so a restart resets the roster to the seed catalog.

pub mod catalog;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RosterError};

/// A named extracurricular offering with a capacity and participant roster.
///
/// The activity name is the roster key and is not repeated here. Participants
/// are stored in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Free-text description of the meeting time.
    pub schedule: String,
    pub max_participants: u32,
    participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Build an activity with pre-registered participants (seed catalog, tests).
    pub fn with_participants(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Currently registered emails, in registration order.
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Availability arithmetic: `max_participants - len(participants)`.
    ///
    /// Signed because the figure can go negative when capacity enforcement is
    /// disabled and an activity is overbooked.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}

/// The full in-memory catalog of activities and their participants.
///
/// Keyed by activity name. Ordered map so listings are deterministic.
#[derive(Debug, Clone)]
pub struct Roster {
    activities: BTreeMap<String, Activity>,
    enforce_capacity: bool,
}

impl Roster {
    /// Empty roster. Seed it with [`Roster::insert`] or use [`Roster::seeded`].
    pub fn new(enforce_capacity: bool) -> Self {
        Self {
            activities: BTreeMap::new(),
            enforce_capacity,
        }
    }

    /// Roster pre-populated with the school's activity catalog.
    pub fn seeded(enforce_capacity: bool) -> Self {
        Self {
            activities: catalog::seed_activities(),
            enforce_capacity,
        }
    }

    /// Add an activity to the catalog. Intended for seeding and tests; the
    /// service never creates activities at runtime.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    /// Full mapping from activity name to its current state.
    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, activity_name: &str) -> Option<&Activity> {
        self.activities.get(activity_name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    /// Register `email` for the named activity.
    ///
    /// Appends to the end of the participant list on success. The duplicate
    /// check runs before the capacity check, so re-registering into a full
    /// activity still reports the duplicate.
    pub fn register(&mut self, activity_name: &str, email: &str) -> Result<()> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::activity_not_found(activity_name))?;

        if activity.is_registered(email) {
            return Err(RosterError::already_registered(email, activity_name));
        }

        if self.enforce_capacity
            && activity.participants.len() >= activity.max_participants as usize
        {
            return Err(RosterError::ActivityFull {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the named activity's participants.
    pub fn unregister(&mut self, activity_name: &str, email: &str) -> Result<()> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::activity_not_found(activity_name))?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::not_registered(email, activity_name))?;

        activity.participants.remove(position);
        Ok(())
    }
}
