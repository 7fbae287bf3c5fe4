use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivitiesError {
    #[error("Activity not found")]
    ActivityNotFound(String),

    #[error("Student already signed up for an activity")]
    AlreadySignedUp { email: String, activity: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { email: String, activity: String },

    #[error("not initialized: run 'activities init'")]
    NotInitialized,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Caller-facing classification of an [`ActivitiesError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The named activity does not exist.
    NotFound,
    /// The student is already enrolled where the policy forbids another signup.
    Conflict,
    /// The student is not enrolled in the activity being left.
    BadState,
    Internal,
}

impl ActivitiesError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActivitiesError::ActivityNotFound(_) => ErrorKind::NotFound,
            ActivitiesError::AlreadySignedUp { .. } => ErrorKind::Conflict,
            ActivitiesError::NotRegistered { .. } => ErrorKind::BadState,
            ActivitiesError::NotInitialized
            | ActivitiesError::InvalidConfig(_)
            | ActivitiesError::Io(_)
            | ActivitiesError::Yaml(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, ActivitiesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_messages_match_api_details() {
        assert_eq!(
            ActivitiesError::ActivityNotFound("Chess".into()).to_string(),
            "Activity not found"
        );
        assert_eq!(
            ActivitiesError::AlreadySignedUp {
                email: "a@x.edu".into(),
                activity: "Chess Club".into(),
            }
            .to_string(),
            "Student already signed up for an activity"
        );
        assert_eq!(
            ActivitiesError::NotRegistered {
                email: "a@x.edu".into(),
                activity: "Chess Club".into(),
            }
            .to_string(),
            "Student is not registered for this activity"
        );
    }

    #[test]
    fn kinds() {
        assert_eq!(
            ActivitiesError::ActivityNotFound("x".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            ActivitiesError::NotInitialized.kind(),
            ErrorKind::Internal
        );
        assert_eq!(
            ActivitiesError::Io(std::io::Error::other("disk full")).kind(),
            ErrorKind::Internal
        );
    }
}
