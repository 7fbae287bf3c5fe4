use crate::activity::Activity;
use std::collections::BTreeMap;

/// (name, description, schedule, max_participants, participants)
type SeedRow = (&'static str, &'static str, &'static str, u32, [&'static str; 2]);

const SEED: &[SeedRow] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        ["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice and play basketball with the school team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        ["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore your creativity through painting and drawing",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        ["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce plays and performances",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        ["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and participate in math competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        ["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Develop public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        ["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

/// The Mergington High School catalog loaded at startup when no config
/// overrides it.
pub fn default_activities() -> BTreeMap<String, Activity> {
    SEED.iter()
        .map(|(name, description, schedule, max, participants)| {
            (
                name.to_string(),
                Activity::new(*description, *schedule, *max).with_participants(*participants),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_contains_chess_and_programming() {
        let seed = default_activities();
        assert_eq!(seed.len(), 9);
        assert!(seed.contains_key("Chess Club"));
        assert!(seed.contains_key("Programming Class"));
    }

    #[test]
    fn seed_emails_are_unique_across_activities() {
        let seed = default_activities();
        let mut seen = HashSet::new();
        for activity in seed.values() {
            for email in &activity.participants {
                assert!(seen.insert(email.clone()), "{email} enrolled twice");
            }
        }
    }

    #[test]
    fn seed_fits_capacity() {
        for (name, activity) in default_activities() {
            assert!(
                activity.participants.len() <= activity.max_participants as usize,
                "{name} over capacity"
            );
        }
    }
}
