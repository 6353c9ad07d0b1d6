pub mod load_profile;
pub mod save_profile;
