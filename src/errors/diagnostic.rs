use std::fmt::Display;

use super::errors::{Error, ErrorImpl, ErrorStage, ErrorTip};

/// Controls how a diagnostic snippet is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Lines of source shown above and below the offending line
    pub context_lines: usize,
    /// Shown in the `->` line of the report when present
    pub file_name: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            context_lines: 1,
            file_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundToken {
    pub kind: String,
    pub lexeme: String,
}

/// Structured, rendered failure returned instead of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub error_name: String,
    pub stage: ErrorStage,
    pub message: String,
    pub tip: Option<String>,
    pub file_name: Option<String>,
    /// 1-based
    pub line: usize,
    /// 1-based, in characters
    pub column: usize,
    pub expected: Vec<String>,
    pub found: Option<FoundToken>,
    pub snippet: String,
}

impl Diagnostic {
    pub fn new(error: &Error, source: &str, config: &ReportConfig) -> Self {
        let position = error.get_position();

        let found = match error.get_kind() {
            ErrorImpl::UnexpectedToken { found, .. } => Some(FoundToken {
                kind: found.kind.describe().to_string(),
                lexeme: found.lexeme.clone(),
            }),
            ErrorImpl::UnrecognisedCharacter { character } => Some(FoundToken {
                kind: String::from("character"),
                lexeme: character.to_string(),
            }),
            ErrorImpl::UnterminatedString => Some(FoundToken {
                kind: String::from("string literal"),
                lexeme: String::from("\""),
            }),
            _ => None,
        };

        let tip = match error.get_tip() {
            ErrorTip::None => None,
            ErrorTip::Suggestion(suggestion) => Some(suggestion),
        };

        Diagnostic {
            error_name: error.get_error_name().to_string(),
            stage: error.get_stage(),
            message: error.get_kind().to_string(),
            tip,
            file_name: config.file_name.clone(),
            line: position.line,
            column: position.column,
            expected: error
                .get_expected()
                .iter()
                .map(|kind| kind.describe().to_string())
                .collect(),
            found,
            snippet: render_snippet(source, position.line, position.column, config.context_lines),
        }
    }

    pub fn from_error(error: &Error, source: &str) -> Self {
        Diagnostic::new(error, source, &ReportConfig::default())
    }
}

impl Display for Diagnostic {
    /*
        Error: UnexpectedToken (found integer literal `3`, expected ...)
        -> main.txt:2:2
          |
        1 | BEGIN
        2 |  3 <- x
          | -^
        3 | END
    */
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.tip {
            Some(tip) => writeln!(f, "Error: {} ({})", self.error_name, tip)?,
            None => writeln!(f, "Error: {}", self.error_name)?,
        }

        match &self.file_name {
            Some(file) => writeln!(f, "-> {}:{}:{}", file, self.line, self.column)?,
            None => writeln!(f, "-> line {}, column {}", self.line, self.column)?,
        }

        write!(f, "{}", self.snippet)
    }
}

impl std::error::Error for Diagnostic {}

/// Returns the text of a 1-based line, without its line terminator. Lines past
/// the end of the source are empty.
pub fn get_line(source: &str, line: usize) -> &str {
    source
        .lines()
        .nth(line.saturating_sub(1))
        .unwrap_or("")
}

/// Columns a tab advances to in rendered snippets.
pub const TAB_WIDTH: usize = 4;

/// Replaces each tab with spaces up to the next multiple of [`TAB_WIDTH`].
pub fn expand_tabs(text: &str) -> String {
    let mut expanded = String::with_capacity(text.len());
    let mut width = 0;

    for character in text.chars() {
        if character == '\t' {
            let stop = (width / TAB_WIDTH + 1) * TAB_WIDTH;
            expanded.extend(std::iter::repeat(' ').take(stop - width));
            width = stop;
        } else {
            expanded.push(character);
            width += 1;
        }
    }

    expanded
}

/// 1-based display column of the character at `column` once tabs before it
/// are expanded.
fn display_column(text: &str, column: usize) -> usize {
    let before = text.chars().take(column - 1).collect::<String>();
    let overflow = (column - 1).saturating_sub(before.chars().count());

    expand_tabs(&before).chars().count() + overflow + 1
}

/// Renders the offending line with a caret under `column`, plus up to
/// `context_lines` lines on either side. Tabs are expanded so the caret lines
/// up with the displayed text.
pub fn render_snippet(source: &str, line: usize, column: usize, context_lines: usize) -> String {
    let line = line.max(1);
    let column = column.max(1);
    let line_count = source.lines().count().max(line);

    let first = line.saturating_sub(context_lines).max(1);
    let last = (line + context_lines).min(line_count);
    let padding = last.to_string().len();

    let mut rendered = vec![format!("{:>padding$} |", "")];

    for number in first..=last {
        let text = get_line(source, number);
        if text.is_empty() {
            rendered.push(format!("{:>padding$} |", number));
        } else {
            rendered.push(format!("{:>padding$} | {}", number, expand_tabs(text)));
        }

        if number == line {
            let caret = display_column(text, column);
            rendered.push(format!("{:>padding$} | {:->caret$}", "", "^"));
        }
    }

    rendered.join("\n")
}
