pub mod load_profile_service;
pub mod save_profile_service;

pub use load_profile_service::LoadProfileForEditingService;
pub use save_profile_service::SaveProfileChangesService;
