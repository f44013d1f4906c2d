//! Denormalized references to externally owned entities.
//!
//! Projects and users live outside the board; their display fields are
//! carried alongside the identifier so cards and selection inputs render
//! without extra lookups. Ownership of the underlying records is external.

use super::{ProjectId, UserId};
use serde::{Deserialize, Serialize};

/// Reference to the project owning a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRef {
    id: ProjectId,
    name: String,
    client: String,
}

impl ProjectRef {
    /// Creates a project reference from denormalized display data.
    #[must_use]
    pub fn new(id: ProjectId, name: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            client: client.into(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> &ProjectId {
        &self.id
    }

    /// Returns the project display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the client display name.
    #[must_use]
    pub fn client(&self) -> &str {
        &self.client
    }
}

/// Reference to the user a task is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssigneeRef {
    id: UserId,
    name: String,
    email: String,
}

impl AssigneeRef {
    /// Creates an assignee reference from denormalized display data.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the user display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
