pub mod modules;
pub mod shared;

pub use modules::profile;

pub use profile::application::form_state::{FieldUpdate, FormStateController, FormStateError};
pub use profile::domain::entities::ProfileRecord;

#[cfg(test)]
mod tests;
