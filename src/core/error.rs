//! Fehlertypen des Graph-Modells.
//!
//! Ungültige IDs sind Programmierfehler der aufrufenden Schicht und werden sofort gemeldet.
//! Eine doppelte Kante ist dagegen ein erwartetes Ergebnis und kein Fehler
//! (siehe [`AddEdgeOutcome`](super::AddEdgeOutcome)).

use thiserror::Error;

/// Fehler bei Operationen auf dem [`Graph`](super::Graph).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Node {0} existiert nicht")]
    UnknownNode(u64),

    #[error("Kante {from} -> {to} existiert nicht")]
    UnknownEdge { from: u64, to: u64 },

    #[error("Node {0} ist kein Start-Node")]
    NotAStartNode(u64),

    #[error("Kante {from} -> {to} ist ein {found}, Operation nicht anwendbar")]
    ShapeMismatch {
        from: u64,
        to: u64,
        found: &'static str,
    },
}
