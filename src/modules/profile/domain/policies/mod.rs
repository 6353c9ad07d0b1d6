pub mod entry_validity;
