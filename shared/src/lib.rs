pub mod models;
pub mod utils;

// Models and helpers shared by the engine and by whatever renders its view
// models. Nothing in this crate knows about the current language; locale-aware
// formatting lives in the engine's locale module.
