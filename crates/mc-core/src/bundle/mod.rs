pub mod config_bundle;
pub mod paper;
