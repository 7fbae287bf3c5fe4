use crate::error::{ActivitiesError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advisory capacity. Signup never checks it.
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
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

    /// Builder: seed the participant list.
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.participants = emails.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// How far the "already signed up" check reaches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignupPolicy {
    /// A student may be enrolled in at most one activity at a time.
    #[default]
    OneActivityPerStudent,
    /// A student may join any number of activities, each at most once.
    OnePerActivity,
}

/// Success payload of a directory mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Directory
// ---------------------------------------------------------------------------

/// In-memory registry of all activities, keyed by name.
///
/// The set of activities is fixed at construction; only participant lists
/// change afterwards. Every failed operation leaves the directory untouched.
#[derive(Debug, Clone)]
pub struct Directory {
    activities: BTreeMap<String, Activity>,
    policy: SignupPolicy,
}

impl Directory {
    pub fn new(activities: BTreeMap<String, Activity>, policy: SignupPolicy) -> Self {
        Self { activities, policy }
    }

    /// The built-in Mergington catalog under the default policy.
    pub fn seeded() -> Self {
        Self::new(crate::seed::default_activities(), SignupPolicy::default())
    }

    pub fn policy(&self) -> SignupPolicy {
        self.policy
    }

    pub fn list_activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Name of the first activity (in name order) that lists `email`.
    pub fn enrollment_of(&self, email: &str) -> Option<&str> {
        self.activities
            .iter()
            .find(|(_, a)| a.has_participant(email))
            .map(|(name, _)| name.as_str())
    }

    pub fn signup(&mut self, name: &str, email: &str) -> Result<Confirmation> {
        if !self.activities.contains_key(name) {
            return Err(ActivitiesError::ActivityNotFound(name.to_string()));
        }

        let existing = match self.policy {
            SignupPolicy::OneActivityPerStudent => self.enrollment_of(email),
            SignupPolicy::OnePerActivity => self
                .activities
                .get(name)
                .filter(|a| a.has_participant(email))
                .map(|_| name),
        };
        if let Some(activity) = existing {
            return Err(ActivitiesError::AlreadySignedUp {
                email: email.to_string(),
                activity: activity.to_string(),
            });
        }

        let activity = self.find_mut(name)?;
        activity.participants.push(email.to_string());
        Ok(Confirmation {
            message: format!("Signed up {email} for {name}"),
        })
    }

    pub fn unregister(&mut self, name: &str, email: &str) -> Result<Confirmation> {
        let activity = self.find_mut(name)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivitiesError::NotRegistered {
                email: email.to_string(),
                activity: name.to_string(),
            });
        };
        activity.participants.remove(pos);
        Ok(Confirmation {
            message: format!("Unregistered {email} from {name}"),
        })
    }

    fn find_mut(&mut self, name: &str) -> Result<&mut Activity> {
        self.activities
            .get_mut(name)
            .ok_or_else(|| ActivitiesError::ActivityNotFound(name.to_string()))
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::seeded()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
