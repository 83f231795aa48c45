//! Hard-coded activity catalog.
//!
//! The catalog is fixed for the life of the process; only participant lists
//! mutate at runtime. A handful of students are pre-registered so a fresh
//! instance has something to show.

use std::collections::BTreeMap;

use super::Activity;

fn emails(addresses: &[&str]) -> Vec<String> {
    addresses.iter().map(|a| (*a).to_string()).collect()
}

/// The school's activity offerings, keyed by activity name.
pub fn seed_activities() -> BTreeMap<String, Activity> {
    let mut activities = BTreeMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity::with_participants(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            emails(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::with_participants(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            emails(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::with_participants(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            emails(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
    );
    activities.insert(
        "Soccer Team".to_string(),
        Activity::with_participants(
            "Join the school soccer team and compete in inter-school matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            emails(&["liam@mergington.edu", "noah@mergington.edu"]),
        ),
    );
    activities.insert(
        "Swimming Club".to_string(),
        Activity::with_participants(
            "Practice swimming techniques and compete in swim meets",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            15,
            emails(&["ava@mergington.edu"]),
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        Activity::with_participants(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            emails(&["isabella@mergington.edu", "mia@mergington.edu"]),
        ),
    );
    activities.insert(
        "Orchestra".to_string(),
        Activity::with_participants(
            "Rehearse and perform orchestral music",
            "Tuesdays and Thursdays, 3:30 PM - 5:00 PM",
            25,
            emails(&["amelia@mergington.edu"]),
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        Activity::with_participants(
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            emails(&["james@mergington.edu", "benjamin@mergington.edu"]),
        ),
    );
    activities.insert(
        "Science Club".to_string(),
        Activity::with_participants(
            "Explore scientific experiments and research projects",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
            emails(&["charlotte@mergington.edu"]),
        ),
    );

    activities
}
