use std::collections::HashSet;

use serde::ser::{Serialize, Serializer};
use tracing::debug;

use crate::errors::{DirectoryError, DirectoryResult};
use crate::models::Activity;
use crate::seed::seed_activities;

/// In-memory collection of all activities for the running process.
///
/// Activities keep the order they were inserted in, which is also the key
/// order of the serialized listing.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    activities: Vec<Activity>,
}

impl Directory {
    /// Directory holding the seed activities.
    pub fn new() -> Self {
        Self {
            activities: seed_activities(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_activities(activities: impl IntoIterator<Item = Activity>) -> DirectoryResult<Self> {
        let mut directory = Self::empty();
        for activity in activities {
            directory.insert(activity)?;
        }
        Ok(directory)
    }

    pub fn list(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Adds an activity, replacing any existing one with the same name.
    pub fn insert(&mut self, activity: Activity) -> DirectoryResult<()> {
        validate(&activity)?;

        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
        Ok(())
    }

    pub fn signup(&mut self, activity_name: &str, email: &str) -> DirectoryResult<String> {
        let activity = self.get_mut(activity_name)?;

        if activity.is_participant(email) {
            return Err(DirectoryError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if activity.is_full() {
            return Err(DirectoryError::CapacityExceeded {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        debug!(activity = %activity_name, count = activity.participants.len(), "participant added");

        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> DirectoryResult<String> {
        let activity = self.get_mut(activity_name)?;

        let position = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| DirectoryError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            })?;

        activity.participants.remove(position);
        debug!(activity = %activity_name, count = activity.participants.len(), "participant removed");

        Ok(format!("Unregistered {} from {}", email, activity_name))
    }

    /// Restores the seed activities, dropping every registration made since.
    pub fn reset(&mut self) {
        self.activities = seed_activities();
    }

    fn get_mut(&mut self, name: &str) -> DirectoryResult<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| DirectoryError::NotFound(name.to_string()))
    }
}

fn validate(activity: &Activity) -> DirectoryResult<()> {
    if activity.name.is_empty() {
        return Err(DirectoryError::InvalidActivity("name must not be empty".to_string()));
    }
    if activity.max_participants == 0 {
        return Err(DirectoryError::InvalidActivity(format!(
            "{}: max_participants must be positive",
            activity.name
        )));
    }
    if activity.participants.len() > activity.max_participants {
        return Err(DirectoryError::InvalidActivity(format!(
            "{}: {} participants exceed capacity {}",
            activity.name,
            activity.participants.len(),
            activity.max_participants
        )));
    }

    let mut seen = HashSet::new();
    if let Some(duplicate) = activity.participants.iter().find(|p| !seen.insert(p.as_str())) {
        return Err(DirectoryError::InvalidActivity(format!(
            "{}: duplicate participant {}",
            activity.name, duplicate
        )));
    }
    Ok(())
}

impl Serialize for Directory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.activities.iter().map(|a| (a.name.as_str(), a)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_directory() -> Directory {
        Directory::from_activities([
            Activity::new("Tiny Club", "Two seats", "Mondays", 2)
                .with_participants(["first@mergington.edu"]),
            Activity::new("Empty Club", "Nobody yet", "Tuesdays", 5),
        ])
        .unwrap()
    }

    #[test]
    fn test_signup_adds_participant() {
        let mut directory = small_directory();

        let message = directory.signup("Empty Club", "new@mergington.edu").unwrap();

        assert!(message.contains("new@mergington.edu"));
        assert!(message.contains("Empty Club"));
        assert_eq!(
            directory.get("Empty Club").unwrap().participants,
            vec!["new@mergington.edu".to_string()]
        );
    }

    #[test]
    fn test_signup_rejection_order() {
        let mut directory = small_directory();
        directory.signup("Tiny Club", "second@mergington.edu").unwrap();

        // Already registered wins over full when both apply
        let err = directory.signup("Tiny Club", "first@mergington.edu").unwrap_err();
        assert!(matches!(err, DirectoryError::AlreadyRegistered { .. }));

        let err = directory.signup("Tiny Club", "third@mergington.edu").unwrap_err();
        assert_eq!(
            err,
            DirectoryError::CapacityExceeded {
                activity: "Tiny Club".to_string(),
                max_participants: 2,
            }
        );
        assert_eq!(directory.get("Tiny Club").unwrap().participants.len(), 2);
    }

    #[test]
    fn test_unknown_activity() {
        let mut directory = small_directory();

        assert_eq!(
            directory.signup("Chess Club", "a@mergington.edu").unwrap_err(),
            DirectoryError::NotFound("Chess Club".to_string())
        );
        assert_eq!(
            directory.unregister("Chess Club", "a@mergington.edu").unwrap_err(),
            DirectoryError::NotFound("Chess Club".to_string())
        );
    }

    #[test]
    fn test_unregister_removes_only_that_email() {
        let mut directory = small_directory();
        directory.signup("Tiny Club", "second@mergington.edu").unwrap();

        let message = directory.unregister("Tiny Club", "first@mergington.edu").unwrap();

        assert!(message.contains("first@mergington.edu"));
        assert_eq!(
            directory.get("Tiny Club").unwrap().participants,
            vec!["second@mergington.edu".to_string()]
        );

        let err = directory.unregister("Tiny Club", "first@mergington.edu").unwrap_err();
        assert!(matches!(err, DirectoryError::NotRegistered { .. }));
    }

    #[test]
    fn test_insert_validation() {
        let mut directory = Directory::empty();

        assert!(directory.insert(Activity::new("Zero", "", "", 0)).is_err());
        assert!(directory
            .insert(Activity::new("Over", "", "", 1).with_participants(["a", "b"]))
            .is_err());
        assert!(directory
            .insert(Activity::new("Dupes", "", "", 3).with_participants(["a", "a"]))
            .is_err());
        assert!(directory.is_empty());

        directory.insert(Activity::new("Club", "v1", "", 3)).unwrap();
        directory.insert(Activity::new("Club", "v2", "", 3)).unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get("Club").unwrap().description, "v2");
    }

    #[test]
    fn test_serialized_keys_keep_insertion_order() {
        let directory = small_directory();
        let json = serde_json::to_string(&directory).unwrap();

        let tiny = json.find("\"Tiny Club\"").unwrap();
        let empty = json.find("\"Empty Club\"").unwrap();
        assert!(tiny < empty);
    }
}
