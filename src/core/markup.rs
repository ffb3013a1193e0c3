//! Label-Markup: `_` leitet einen Index ein, `^` einen Exponenten, `||` trennt Zeilen.
//!
//! Beispiel: `"q_1^2 || x"` ergibt zwei Zeilen, die erste mit Text `q`, Index `1` und Exponent `2`.

use serde::{Deserialize, Serialize};

/// Trennzeichen zwischen mehreren Label-Zeilen in der Eingabe.
pub const LINE_SEPARATOR: &str = "||";

/// Eine geparste Label-Zeile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelLine {
    /// Grundtext
    pub text: String,
    /// Tiefgestellter Teil (leer wenn nicht vorhanden)
    pub sub: String,
    /// Hochgestellter Teil (leer wenn nicht vorhanden)
    pub sup: String,
}

impl LabelLine {
    /// `true` wenn weder Text noch Index noch Exponent vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.sub.is_empty() && self.sup.is_empty()
    }
}

/// Zerlegt eine einzelne Zeile in Text, Index und Exponent.
///
/// Der Index wird vor dem Exponenten gesucht: bei `a_b^c` endet der Index am ersten `^`.
pub fn parse_line(line: &str) -> LabelLine {
    let mut sub_parts = line.split('_');
    let mut sup_parts = line.split('^');
    let before_sub = sub_parts.next().unwrap_or_default();
    let before_sup = sup_parts.next().unwrap_or_default();
    let sub_segment = sub_parts.next();
    let sup_segment = sup_parts.next();

    match (sub_segment, sup_segment) {
        (None, None) => LabelLine {
            text: line.to_string(),
            ..LabelLine::default()
        },
        (Some(sub), None) => LabelLine {
            text: before_sub.to_string(),
            sub: sub.to_string(),
            sup: String::new(),
        },
        (None, Some(sup)) => LabelLine {
            text: before_sup.to_string(),
            sub: String::new(),
            sup: sup.to_string(),
        },
        (Some(sub), Some(sup)) => LabelLine {
            text: before_sub.to_string(),
            sub: sub.split('^').next().unwrap_or_default().to_string(),
            sup: sup.to_string(),
        },
    }
}

/// Parst mehrere (bereits getrennte) Zeilen.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LabelLine> {
    lines.iter().map(|l| parse_line(l.as_ref())).collect()
}

/// Teilt eine Roh-Eingabe an `||` und trimmt jede Zeile.
pub fn split_input(raw: &str) -> Vec<String> {
    raw.split(LINE_SEPARATOR)
        .map(|line| line.trim().to_string())
        .collect()
}

/// Beschriftung eines Nodes oder einer Kante (Roh-Zeilen, Markup unverändert).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description {
    lines: Vec<String>,
}

impl Description {
    /// Leere Beschriftung.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parst eine Eingabe aus dem Bearbeitungsfeld; nur Leerzeichen ergibt eine leere Beschriftung.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::empty();
        }
        Self {
            lines: split_input(raw),
        }
    }

    /// Roh-Zeilen.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `true` wenn keine Zeile vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Geparste Zeilen für Darstellung und Export.
    pub fn markup(&self) -> Vec<LabelLine> {
        parse_lines(&self.lines)
    }

    /// Text für das Bearbeitungsfeld (Zeilen mit ` || ` verbunden).
    pub fn to_input(&self) -> String {
        self.lines.join(&format!(" {LINE_SEPARATOR} "))
    }
}
