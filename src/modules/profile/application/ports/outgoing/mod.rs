pub mod profile_query;
pub mod profile_updater;

pub use profile_query::{ProfileQuery, ProfileQueryError};
pub use profile_updater::{ProfileUpdateError, ProfileUpdater};
