//! Use-Cases der Application-Layer-Orchestrierung.

pub mod drag;
pub mod editing;
pub mod export;
pub mod selection;
pub mod view;
