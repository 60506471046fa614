//! Frontend Models
//!
//! Data structures matching the remote todo API.

use serde::{Deserialize, Serialize};

use crate::error::InvalidUserFilter;

/// Task record as served by `/todos`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

/// Highest user id the remote source serves.
pub const MAX_USER_ID: u32 = 10;

/// Which user's tasks to fetch. `0` means every user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct UserFilter(u32);

impl UserFilter {
    pub const ALL: UserFilter = UserFilter(0);

    pub fn user_id(self) -> Option<u32> {
        (self.0 != 0).then_some(self.0)
    }

    /// Advance to the next filter, wrapping from the last user back to "all".
    pub fn next(self) -> Self {
        UserFilter((self.0 + 1) % (MAX_USER_ID + 1))
    }

    /// Text shown on the header button.
    pub fn label(self) -> String {
        match self.user_id() {
            Some(id) => format!("User: {}", id),
            None => "User: A".to_string(),
        }
    }

    /// Accessible description of what pressing the button selects.
    pub fn next_label(self) -> String {
        match self.next().user_id() {
            Some(id) => format!("Toggle to user {}", id),
            None => "Toggle to all users".to_string(),
        }
    }
}

impl TryFrom<u32> for UserFilter {
    type Error = InvalidUserFilter;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > MAX_USER_ID {
            return Err(InvalidUserFilter(value));
        }
        Ok(UserFilter(value))
    }
}

impl From<UserFilter> for u32 {
    fn from(filter: UserFilter) -> Self {
        filter.0
    }
}

/// A completion change that still has to reach the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionUpdate {
    pub id: u32,
    pub completed: bool,
}

/// Body of `PATCH /todos/{id}`
#[derive(Debug, Serialize)]
pub struct CompletionPatch {
    pub completed: bool,
}

impl From<CompletionUpdate> for CompletionPatch {
    fn from(update: CompletionUpdate) -> Self {
        Self { completed: update.completed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_remote_shape() {
        let json = r#"[
            {"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false},
            {"userId": 1, "id": 4, "title": "et porro tempora", "completed": true}
        ]"#;

        let tasks: Vec<Task> = serde_json::from_str(json).unwrap();

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].user_id, 1);
        assert_eq!(tasks[0].title, "delectus aut autem");
        assert!(!tasks[0].completed);
        assert_eq!(tasks[1].id, 4);
        assert!(tasks[1].completed);
    }

    #[test]
    fn test_patch_body() {
        let patch = CompletionPatch::from(CompletionUpdate { id: 3, completed: true });
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"completed":true}"#);
    }

    #[test]
    fn test_cycle_returns_to_start() {
        let start = UserFilter::ALL;
        let mut filter = start;
        let mut seen = Vec::new();
        for _ in 0..11 {
            filter = filter.next();
            seen.push(u32::from(filter));
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 0]);
        assert_eq!(filter, start);
    }

    #[test]
    fn test_try_from_range() {
        assert_eq!(UserFilter::try_from(0), Ok(UserFilter::ALL));
        assert_eq!(UserFilter::try_from(10).unwrap().user_id(), Some(10));
        assert_eq!(UserFilter::try_from(11), Err(InvalidUserFilter(11)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(UserFilter::ALL.label(), "User: A");
        assert_eq!(UserFilter::ALL.next_label(), "Toggle to user 1");

        let last = UserFilter::try_from(10).unwrap();
        assert_eq!(last.label(), "User: 10");
        assert_eq!(last.next_label(), "Toggle to all users");
    }
}
