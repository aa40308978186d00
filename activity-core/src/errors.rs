use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found: {0}")]
    NotFound(String),

    #[error("Student {email} is already signed up for {activity}")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Activity {activity} is full ({max_participants} participants)")]
    CapacityExceeded {
        activity: String,
        max_participants: usize,
    },

    #[error("Student {email} is not registered for {activity}")]
    NotRegistered { activity: String, email: String },

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),
}

impl DirectoryError {
    /// Name of the activity the failed operation targeted, if any.
    pub fn activity(&self) -> Option<&str> {
        match self {
            DirectoryError::NotFound(activity) => Some(activity.as_str()),
            DirectoryError::AlreadyRegistered { activity, .. }
            | DirectoryError::CapacityExceeded { activity, .. }
            | DirectoryError::NotRegistered { activity, .. } => Some(activity.as_str()),
            DirectoryError::InvalidActivity(_) => None,
        }
    }
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
