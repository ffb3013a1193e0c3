#![no_main]

use automaton_editor::core::{markup, Description};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let description = Description::parse(input);
        let lines = description.markup();
        assert_eq!(lines.len(), description.lines().len());

        // Einzelzeilen duerfen nie paniken, auch ohne vorheriges Splitten
        let _ = markup::parse_line(input);
    }
});
