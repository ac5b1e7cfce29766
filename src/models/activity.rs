use serde::Serialize;
use std::collections::HashMap;

/// One catalog entry. The activity name lives as the map key, not in the
/// struct, so the listing serializes as `{name: {...}, ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Insertion-order-preserving; uniqueness is enforced by the store.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }
}

/// The fixed catalog. Activities are seeded once at startup and never
/// added or removed at runtime.
pub fn seed_catalog() -> HashMap<String, Activity> {
    let mut catalog = HashMap::new();
    catalog.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    catalog.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    catalog.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    catalog.insert(
        "Soccer Team".to_string(),
        Activity::new(
            "Join the school soccer team and compete in local leagues",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        )
        .with_participants(&["liam@mergington.edu", "noah@mergington.edu"]),
    );
    catalog.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore painting, drawing, and other visual arts",
            "Wednesdays, 3:30 PM - 5:00 PM",
            15,
        )
        .with_participants(&["amelia@mergington.edu", "harper@mergington.edu"]),
    );
    catalog.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
        )
        .with_participants(&["ella@mergington.edu", "scarlett@mergington.edu"]),
    );
    catalog.insert(
        "Math Club".to_string(),
        Activity::new(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(&["james@mergington.edu", "benjamin@mergington.edu"]),
    );
    catalog.insert(
        "Science Club".to_string(),
        Activity::new(
            "Hands-on experiments and science fair preparation",
            "Thursdays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(&["lucas@mergington.edu", "mia@mergington.edu"]),
    );
    catalog.insert(
        "Music Ensemble".to_string(),
        Activity::new(
            "Rehearse and perform as part of the school ensemble",
            "Fridays, 3:00 PM - 4:30 PM",
            25,
        )
        .with_participants(&["ava@mergington.edu", "ethan@mergington.edu"]),
    );
    catalog
}
