//! Feature-Handler: mutieren den AppState pro Command-Gruppe.

pub mod animation;
pub mod curve_edit;
pub mod dialog;
pub mod drag;
pub mod view;
