//! Line parser for the word file format.
//!
//! Every line is `word<SEP>definition`. The read path accepts several
//! separators; the write path always uses [`PRIMARY_SEPARATOR`].

/// Separator emitted when writing a line.
pub const PRIMARY_SEPARATOR: &str = " - ";

/// Separators accepted by the store and pack reader, in priority order.
const STANDARD_SEPARATORS: &[&str] = &[" - ", " \u{2013} ", " \u{2014} ", " : "];

/// Separator accepted by the multiple-choice word-list reader.
const BARE_COLON_SEPARATORS: &[&str] = &[":"];

/// Which family of separators a reader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeparatorMode {
    /// Space-surrounded hyphen, en dash, em dash, or colon.
    #[default]
    Standard,
    /// A bare `:` with no spacing requirement.
    BareColon,
}

impl SeparatorMode {
    /// The separators for this mode, highest priority first.
    pub fn separators(self) -> &'static [&'static str] {
        match self {
            SeparatorMode::Standard => STANDARD_SEPARATORS,
            SeparatorMode::BareColon => BARE_COLON_SEPARATORS,
        }
    }
}

/// Split a line into `(word, definition)` using the standard separators.
pub fn parse_line(line: &str) -> (String, String) {
    parse_line_with(line, SeparatorMode::Standard)
}

/// Split a line into `(word, definition)`.
///
/// The first separator in priority order that appears anywhere in the line
/// wins, even if a lower-priority one occurs earlier. Only its first
/// occurrence splits the line. Without any separator the whole line is the
/// word and the definition is empty.
pub fn parse_line_with(line: &str, mode: SeparatorMode) -> (String, String) {
    let line = line.trim();
    for sep in mode.separators() {
        if let Some((word, definition)) = line.split_once(sep) {
            return (word.trim().to_string(), definition.trim().to_string());
        }
    }
    (line.to_string(), String::new())
}

/// Whether a line contains any separator of the given mode.
pub fn has_separator(line: &str, mode: SeparatorMode) -> bool {
    mode.separators().iter().any(|sep| line.contains(sep))
}

/// Render a line in the canonical write form, without the trailing newline.
pub fn format_line(word: &str, definition: &str) -> String {
    format!("{word}{PRIMARY_SEPARATOR}{definition}")
}
