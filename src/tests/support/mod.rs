pub mod profile_fixtures;
