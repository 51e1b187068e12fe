use crate::models::user::{NewUser, User, UserPatch};
use crate::stores::id_allocator::IdAllocator;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// In-memory system of record for users
///
/// Records are kept in insertion order. The record list and the id allocator
/// sit behind one lock, so allocating an id and appending the record happen
/// as a single step.
pub struct UserStore {
    inner: Mutex<Inner>,
}

struct Inner {
    users: Vec<User>,
    ids: IdAllocator,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                users: Vec::new(),
                ids: IdAllocator::new(),
            }),
        }
    }

    // Mutations never leave a record half-written, so a poisoned lock still
    // guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all users in creation order
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    pub fn get(&self, id: u64) -> Option<User> {
        self.lock().users.iter().find(|user| user.id == id).cloned()
    }

    pub fn contains(&self, id: u64) -> bool {
        self.lock().users.iter().any(|user| user.id == id)
    }

    /// Assign the next id to `new_user` and append it
    pub fn create(&self, new_user: NewUser) -> User {
        let mut inner = self.lock();
        let id = inner.ids.allocate();
        let user = User::new(id, new_user);
        inner.users.push(user.clone());
        user
    }

    /// Apply `patch` in place. Returns the updated record, or `None` if no
    /// user has this id.
    pub fn update(&self, id: u64, patch: UserPatch) -> Option<User> {
        let mut inner = self.lock();
        let user = inner.users.iter_mut().find(|user| user.id == id)?;
        user.apply(patch);
        Some(user.clone())
    }

    /// Remove a user, keeping the order of the remaining records
    pub fn delete(&self, id: u64) -> Option<User> {
        let mut inner = self.lock();
        let index = inner.users.iter().position(|user| user.id == id)?;
        Some(inner.users.remove(index))
    }

    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
