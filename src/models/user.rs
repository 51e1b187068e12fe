use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user record as stored and as returned over HTTP
///
/// `age` and `bio` serialize as `null` when unset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Allocator-issued id, never changed after creation
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Free-form JSON value
    pub age: Option<Value>,
    pub bio: Option<String>,
}

/// Validated fields for a new user, before an id is assigned
#[derive(Clone, Debug, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<Value>,
    pub bio: Option<String>,
}

/// Field replacements for an existing user
///
/// `None` leaves a field untouched. For the nullable fields, `Some(None)`
/// clears the stored value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<Option<Value>>,
    pub bio: Option<Option<String>>,
}

impl User {
    pub fn new(id: u64, new_user: NewUser) -> Self {
        Self {
            id,
            name: new_user.name,
            email: new_user.email,
            age: new_user.age,
            bio: new_user.bio,
        }
    }

    pub fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(bio) = patch.bio {
            self.bio = bio;
        }
    }

    /// Path of this record's get-by-id route
    pub fn location(&self) -> String {
        format!("/users/{}", self.id)
    }
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none() && self.bio.is_none()
    }
}
