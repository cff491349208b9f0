//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Directory`, [`MutationPolicy`]) are implemented by
//! outbound adapters. Driving ports ([`SearchQuery`], [`UsersQuery`],
//! [`UsersCommand`]) are implemented by domain services and called by the
//! HTTP handlers.

mod macros;
pub(crate) use macros::define_port_error;

mod mutation_policy;
mod page_directory;
mod search_query;
mod study_field_directory;
mod user_directory;
mod users_command;
mod users_query;

pub use mutation_policy::{MutationPolicy, UnrestrictedMutationPolicy, UserMutation};
#[cfg(test)]
pub use page_directory::MockPageDirectory;
pub use page_directory::{PageDirectory, PageDirectoryError};
#[cfg(test)]
pub use search_query::MockSearchQuery;
pub use search_query::SearchQuery;
#[cfg(test)]
pub use study_field_directory::MockStudyFieldDirectory;
pub use study_field_directory::{StudyFieldDirectory, StudyFieldDirectoryError};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{UserDirectory, UserDirectoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::{DeleteOutcome, UsersCommand};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
