//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler führt den Use-Case seines Feature-Bereichs aus und hält
//! anschließend die Render-Szene synchron. Der Controller dispatcht an die
//! passende Handler-Funktion.

pub mod editing;
pub mod export;
pub mod interaction;
pub mod selection;
pub mod view;
