use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::models::{Activity, Roster};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Seed file {path} is not a valid roster: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid seed activity '{activity}': {reason}")]
    Invalid { activity: String, reason: String },
}

const SEED: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Tennis Team",
        "Competitive tennis team with tournaments and practice drills",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        16,
        &[],
    ),
    (
        "Basketball Club",
        "Join our basketball team for pickup games and skill development",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        20,
        &[],
    ),
    (
        "Debate Club",
        "Develop critical thinking and public speaking through competitive debate",
        "Wednesdays, 3:30 PM - 5:00 PM",
        18,
        &[],
    ),
    (
        "Robotics Club",
        "Design and build robots for engineering competitions",
        "Saturdays, 10:00 AM - 12:00 PM",
        15,
        &[],
    ),
    (
        "Drama Club",
        "Perform in stage productions and develop acting skills",
        "Thursdays, 4:00 PM - 5:30 PM",
        25,
        &[],
    ),
    (
        "Art Studio",
        "Explore painting, drawing, sculpture, and other visual arts",
        "Mondays and Fridays, 3:30 PM - 5:00 PM",
        20,
        &[],
    ),
    (
        "Music Ensemble",
        "Play instruments and perform in concerts with our school orchestra",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        30,
        &[],
    ),
];

/// The built-in Mergington High School roster.
pub fn default_roster() -> Roster {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

/// Loads a roster from a JSON file shaped like the `GET /activities` body.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Roster, SeedError> {
    let path = path.as_ref();
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;
    let entries: SeedEntries = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: display,
        source,
    })?;
    let roster = entries.into_roster()?;
    validate_roster(&roster)?;
    Ok(roster)
}

/// Top-level seed object, kept as a list so repeated names are still
/// visible after parsing (a map would keep only the last one).
struct SeedEntries(Vec<(String, Activity)>);

impl SeedEntries {
    fn into_roster(self) -> Result<Roster, SeedError> {
        let mut roster = Roster::with_capacity(self.0.len());
        for (name, activity) in self.0 {
            if roster.contains_key(&name) {
                return Err(SeedError::Invalid {
                    activity: name,
                    reason: "duplicate activity name".to_string(),
                });
            }
            roster.insert(name, activity);
        }
        Ok(roster)
    }
}

impl<'de> Deserialize<'de> for SeedEntries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SeedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping activity names to activities")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, Activity>()? {
                    entries.push(entry);
                }
                Ok(SeedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Uses `path` when given, otherwise the built-in roster.
pub fn resolve_roster(path: Option<&Path>) -> Result<Roster, SeedError> {
    match path {
        Some(p) => load_roster(p),
        None => Ok(default_roster()),
    }
}

pub fn validate_roster(roster: &Roster) -> Result<(), SeedError> {
    for (name, activity) in roster {
        let invalid = |reason: &str| SeedError::Invalid {
            activity: name.clone(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name must not be blank"));
        }
        if activity.max_participants == 0 {
            return Err(invalid("max_participants must be positive"));
        }

        let mut seen = HashSet::new();
        for participant in &activity.participants {
            if participant.is_empty() {
                return Err(invalid("participant identifiers must not be empty"));
            }
            if !seen.insert(participant.as_str()) {
                return Err(invalid(&format!("duplicate participant {}", participant)));
            }
        }
    }
    Ok(())
}
