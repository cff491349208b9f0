//! Recording test doubles for the directory ports.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{
    PageDirectory, PageDirectoryError, StudyFieldDirectory, StudyFieldDirectoryError,
    UserDirectory, UserDirectoryError,
};
use crate::domain::{Page, PageId, StudyField, StudyFieldId, User, UserDraft, UserId};

/// Port call observed by a recording double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DirectoryCall {
    FullName { first_name: String, surname: String },
    Surname { surname: String, limit: usize },
    Pages { name: String, limit: usize, offset: usize },
}

pub(crate) fn user(id: &str, first_name: &str, surname: &str) -> User {
    let email = format!("{}@example.com", id);
    User::from_draft(
        UserId::new(id).expect("fixture user id"),
        UserDraft::new(first_name, surname, email),
    )
}

pub(crate) fn page(id: &str, name: &str) -> Page {
    Page::new(PageId::new(id).expect("fixture page id"), name)
}

pub(crate) fn study_field(id: &str, name: &str) -> StudyField {
    StudyField::new(StudyFieldId::new(id).expect("fixture study field id"), name)
}

/// Vector-backed directory that records every search call it receives.
#[derive(Default)]
pub(crate) struct RecordingDirectory {
    users: Mutex<Vec<User>>,
    pages: Vec<Page>,
    study_fields: Vec<StudyField>,
    calls: Mutex<Vec<DirectoryCall>>,
}

impl RecordingDirectory {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub(crate) fn and_pages(mut self, pages: Vec<Page>) -> Self {
        self.pages = pages;
        self
    }

    pub(crate) fn and_study_fields(mut self, study_fields: Vec<StudyField>) -> Self {
        self.study_fields = study_fields;
        self
    }

    pub(crate) fn calls(&self) -> Vec<DirectoryCall> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub(crate) fn users(&self) -> Vec<User> {
        self.users.lock().expect("users lock").clone()
    }

    fn record(&self, call: DirectoryCall) {
        self.calls.lock().expect("calls lock").push(call);
    }
}

#[async_trait]
impl UserDirectory for RecordingDirectory {
    async fn find_by_full_name(
        &self,
        first_name: &str,
        surname: &str,
    ) -> Result<Option<User>, UserDirectoryError> {
        self.record(DirectoryCall::FullName {
            first_name: first_name.to_owned(),
            surname: surname.to_owned(),
        });
        Ok(self
            .users()
            .into_iter()
            .find(|u| u.first_name() == first_name && u.surname() == surname))
    }

    async fn find_by_surname(
        &self,
        surname: &str,
        limit: usize,
    ) -> Result<Vec<User>, UserDirectoryError> {
        self.record(DirectoryCall::Surname {
            surname: surname.to_owned(),
            limit,
        });
        Ok(self
            .users()
            .into_iter()
            .filter(|u| u.surname() == surname)
            .take(limit)
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self.users())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserDirectoryError> {
        Ok(self.users().into_iter().find(|u| u.id() == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserDirectoryError> {
        Ok(self.users().into_iter().find(|u| u.email() == email))
    }

    async fn find_by_study_field_id(
        &self,
        study_field_id: &StudyFieldId,
    ) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self
            .users()
            .into_iter()
            .filter(|u| u.study_field_id() == Some(study_field_id))
            .collect())
    }

    async fn save(&self, draft: UserDraft) -> Result<User, UserDirectoryError> {
        let user = User::from_draft(UserId::random(), draft);
        self.users.lock().expect("users lock").push(user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: &UserId) -> Result<(), UserDirectoryError> {
        self.users.lock().expect("users lock").retain(|u| u.id() != id);
        Ok(())
    }

    async fn update_study_field(
        &self,
        id: &UserId,
        study_field_id: Option<StudyFieldId>,
    ) -> Result<(), UserDirectoryError> {
        let mut users = self.users.lock().expect("users lock");
        for stored in users.iter_mut() {
            if stored.id() == id {
                *stored = stored.clone().with_study_field(study_field_id.clone());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl PageDirectory for RecordingDirectory {
    async fn find_by_name(
        &self,
        name: &str,
        limit: usize,
        offset: usize,
    ) -> Result<Vec<Page>, PageDirectoryError> {
        self.record(DirectoryCall::Pages {
            name: name.to_owned(),
            limit,
            offset,
        });
        Ok(self
            .pages
            .iter()
            .filter(|p| p.name() == name)
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl StudyFieldDirectory for RecordingDirectory {
    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<StudyField>, StudyFieldDirectoryError> {
        Ok(self.study_fields.iter().find(|f| f.name() == name).cloned())
    }

    async fn find_by_id(
        &self,
        id: &StudyFieldId,
    ) -> Result<Option<StudyField>, StudyFieldDirectoryError> {
        Ok(self.study_fields.iter().find(|f| f.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<StudyField>, StudyFieldDirectoryError> {
        Ok(self.study_fields.clone())
    }
}
