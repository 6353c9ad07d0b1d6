pub mod support;

mod form_state_scenarios;
