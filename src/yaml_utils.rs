//! YAML utilities for configuration loading
//!
//! Configuration files are often hand-edited or pasted from other tools, so
//! stray control characters are removed before the text reaches the parser.

/// Remove control characters other than newline, carriage return and tab.
pub(crate) fn strip_control_characters(yaml: &str) -> String {
    yaml.chars()
        .filter(|ch| !matches!(ch, '\x00'..='\x08' | '\x0B'..='\x0C' | '\x0E'..='\x1F'))
        .collect()
}
