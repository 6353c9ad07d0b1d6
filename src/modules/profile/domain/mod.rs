pub mod comparison;
pub mod entities;
pub mod fields;
pub mod policies;
