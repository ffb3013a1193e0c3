//! Geometrie-Engine: zustandslose Ableitung von Zeichenbefehlen aus dem Graph,
//! Rückrechnung von Zeigerbewegungen in Modellparameter und Hit-Tests.

pub mod drag;
pub mod shapes;

pub use hit_test::hit_test;
