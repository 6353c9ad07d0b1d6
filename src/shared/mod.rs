pub mod patch_field;
pub mod telemetry;

pub use patch_field::PatchField;
