//! Export des Graphen in eine statische Satzbeschreibung.
//!
//! Aktuell nur TikZ: Nodes relativ zum ersten Node positioniert, alle Kanten in
//! einer `\path`-Anweisung.

pub mod tikz;

pub use tikz::to_tikz;
