//! In-memory document store backing every directory port.
//!
//! Collections keep insertion order, which stands in for a document store's
//! natural order. Name and e-mail matching is exact and case-sensitive.
//! Lock poisoning is reported as a query failure rather than a panic.

mod seed;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    PageDirectory, PageDirectoryError, StudyFieldDirectory, StudyFieldDirectoryError,
    UserDirectory, UserDirectoryError,
};
use crate::domain::{Page, StudyField, StudyFieldId, User, UserDraft, UserId};

pub use seed::{Seed, SeedError, load_seed};

fn read<'a, T, E>(
    lock: &'a RwLock<T>,
    collection: &str,
    error: impl FnOnce(String) -> E,
) -> Result<RwLockReadGuard<'a, T>, E> {
    lock.read()
        .map_err(|_| error(format!("{collection} collection lock poisoned")))
}

fn write<'a, T, E>(
    lock: &'a RwLock<T>,
    collection: &str,
    error: impl FnOnce(String) -> E,
) -> Result<RwLockWriteGuard<'a, T>, E> {
    lock.write()
        .map_err(|_| error(format!("{collection} collection lock poisoned")))
}

/// Users, pages, and study fields held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryDirectory {
    users: RwLock<Vec<User>>,
    pages: RwLock<Vec<Page>>,
    study_fields: RwLock<Vec<StudyField>>,
}

impl InMemoryDirectory {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the seed collections.
    pub fn from_seed(seed: Seed) -> Self {
        debug!(
            users = seed.users.len(),
            pages = seed.pages.len(),
            study_fields = seed.study_fields.len(),
            "in-memory directory seeded"
        );
        Self {
            users: RwLock::new(seed.users),
            pages: RwLock::new(seed.pages),
            study_fields: RwLock::new(seed.study_fields),
        }
    }

    fn users(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, UserDirectoryError> {
        read(&self.users, "users", UserDirectoryError::query)
    }

    fn users_mut(&self) -> Result<RwLockWriteGuard<'_, Vec<User>>, UserDirectoryError> {
        write(&self.users, "users", UserDirectoryError::query)
    }

    fn study_fields(
        &self,
    ) -> Result<RwLockReadGuard<'_, Vec<StudyField>>, StudyFieldDirectoryError> {
        read(
            &self.study_fields,
            "study fields",
            StudyFieldDirectoryError::query,
        )
    }
}

#[async_trait]
impl UserDirectory for InMemoryDirectory {
    async fn find_by_full_name(
        &self,
        first_name: &str,
        surname: &str,
    ) -> Result<Option<User>, UserDirectoryError> {
        Ok(self
            .users()?
            .iter()
            .find(|u| u.first_name() == first_name && u.surname() == surname)
            .cloned())
    }

    async fn find_by_surname(
        &self,
        surname: &str,
        limit: usize,
    ) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self
            .users()?
            .iter()
            .filter(|u| u.surname() == surname)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self.users()?.clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        Ok(self.users()?.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserDirectoryError> {
        Ok(self.users()?.iter().find(|u| u.email() == email).cloned())
    }

    async fn find_by_study_field_id(
        &self,
        study_field_id: &StudyFieldId,
    ) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self
            .users()?
            .iter()
            .filter(|u| u.study_field_id() == Some(study_field_id))
            .cloned()
            .collect())
    }

    async fn save(&self, draft: UserDraft) -> Result<User, UserDirectoryError> {
        let user = User::from_draft(UserId::random(), draft);
        self.users_mut()?.push(user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserDirectoryError> {
        self.users_mut()?.retain(|u| u.id() != id);
        Ok(())
    }

    async fn update_study_field(
        &self,
        id: &UserId,
        study_field_id: Option<StudyFieldId>,
    ) -> Result<(), UserDirectoryError> {
        let mut users = self.users_mut()?;
        if let Some(stored) = users.iter_mut().find(|u| u.id() == id) {
            *stored = stored.clone().with_study_field(study_field_id);
        }
        Ok(())
    }
}

#[async_trait]
impl PageDirectory for InMemoryDirectory {
    async fn find_by_name(
        &self,
        name: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Page>, PageDirectoryError> {
        let pages = read(&self.pages, "pages", PageDirectoryError::query)?;
        Ok(pages
            .iter()
            .filter(|p| p.name() == name)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StudyFieldDirectory for InMemoryDirectory {
    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<StudyField>, StudyFieldDirectoryError> {
        Ok(self.study_fields()?.iter().find(|f| f.name() == name).cloned())
    }

    async fn find_by_id(
        &self,
        id: &StudyFieldId,
    ) -> Result<Option<StudyField>, StudyFieldDirectoryError> {
        Ok(self.study_fields()?.iter().find(|f| f.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<StudyField>, StudyFieldDirectoryError> {
        Ok(self.study_fields()?.clone())
    }
}
