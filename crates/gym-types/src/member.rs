//! Member types

use serde::{Deserialize, Serialize};

/// Status assigned to every newly registered member
pub const DEFAULT_STATUS: &str = "active";

/// A registered gym member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// National identifier, also the primary key
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: i64,
    pub age: i64,
    pub gender: String,
    pub plan: String,
    pub notes: Option<String>,
    pub status: String,
}

/// Registration data for a member that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMember {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: i64,
    pub age: i64,
    pub gender: String,
    pub plan: String,
    pub notes: Option<String>,
}

impl NewMember {
    /// Build the stored record, with status set to [`DEFAULT_STATUS`]
    pub fn into_member(self) -> Member {
        Member {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            gender: self.gender,
            plan: self.plan,
            notes: self.notes,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Replacement values for every mutable field of a member.
///
/// The id is not part of it: a member's identifier never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberChanges {
    pub name: String,
    pub email: Option<String>,
    pub phone: i64,
    pub age: i64,
    pub gender: String,
    pub plan: String,
    pub notes: Option<String>,
    pub status: String,
}

impl MemberChanges {
    /// The full record of member `id` once these changes are stored
    pub fn into_member(self, id: i64) -> Member {
        Member {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            age: self.age,
            gender: self.gender,
            plan: self.plan,
            notes: self.notes,
            status: self.status,
        }
    }
}

impl Member {
    /// Overwrite all mutable fields, keeping the id
    pub fn apply(&mut self, changes: MemberChanges) {
        self.name = changes.name;
        self.email = changes.email;
        self.phone = changes.phone;
        self.age = changes.age;
        self.gender = changes.gender;
        self.plan = changes.plan;
        self.notes = changes.notes;
        self.status = changes.status;
    }
}
