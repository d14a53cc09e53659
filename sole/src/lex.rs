use std::fmt::Display;

use crate::text::LineEnding;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LexicalError {
    /// Occurs when a line is requested but the cursor is already past the last one
    OutOfInput(usize),
}

impl Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexicalError::OutOfInput(line) => write!(f, "Unexpected end of input at line {line}"),
        }
    }
}

/// Classification of a single line decided by the leading word of its content
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Project("...`
    ProjectOpen,
    /// `EndProject`
    ProjectClose,
    /// `Keyword(Label) = When`, carries the keyword
    SectionOpen(&'a str),
    /// `EndKeyword`, carries the keyword
    SectionClose(&'a str),
    /// `Global`
    GlobalOpen,
    /// `EndGlobal`
    GlobalClose,
    /// Header or section content line
    Text,
    EndOfInput,
}

impl Display for LineKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineKind::ProjectOpen => write!(f, "ProjectOpen"),
            LineKind::ProjectClose => write!(f, "ProjectClose"),
            LineKind::SectionOpen(tag) => write!(f, "SectionOpen({tag})"),
            LineKind::SectionClose(tag) => write!(f, "SectionClose({tag})"),
            LineKind::GlobalOpen => write!(f, "GlobalOpen"),
            LineKind::GlobalClose => write!(f, "GlobalClose"),
            LineKind::Text => write!(f, "Text"),
            LineKind::EndOfInput => write!(f, "EndOfInput"),
        }
    }
}

const CLOSE_PREFIX: &str = "End";

impl<'a> LineKind<'a> {
    /// Classifies line content, i.e. a line with its indentation already stripped
    pub fn of(content: &'a str) -> Self {
        let end = content
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(content.len());
        let (word, rest) = content.split_at(end);
        let opens = rest.starts_with('(');
        match word {
            "Project" if opens => LineKind::ProjectOpen,
            "EndProject" => LineKind::ProjectClose,
            "Global" => LineKind::GlobalOpen,
            "EndGlobal" => LineKind::GlobalClose,
            _ if opens && !word.is_empty() => LineKind::SectionOpen(word),
            _ => match word.strip_prefix(CLOSE_PREFIX) {
                Some(tag) if !tag.is_empty() => LineKind::SectionClose(tag),
                _ => LineKind::Text,
            },
        }
    }
}

/// Line cursor over a whole solution file.
///
/// Input is split into logical lines on `\n`. One trailing `\r` of each line is dropped
/// only when the file uses `\r\n`, otherwise it stays part of the line.
/// The cursor only ever moves forward; the grammar needs no more lookahead than the current line.
pub struct Lexer<'a> {
    lines: Vec<&'a str>,
    index: usize,
    terminated: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str, newline: LineEnding) -> Self {
        let mut lines: Vec<&'a str> = input
            .split('\n')
            .map(|l| match newline {
                LineEnding::CrLf => l.strip_suffix('\r').unwrap_or(l),
                LineEnding::Lf => l,
            })
            .collect();
        // a final line break ends the last line instead of opening an empty one
        let terminated = input.ends_with('\n');
        if terminated {
            lines.pop();
        }
        if input.is_empty() {
            lines.clear();
        }
        Lexer {
            lines,
            index: 0,
            terminated,
        }
    }

    /// Zero based index of the current line which is also
    /// the 1-based number of the line consumed last
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn at_end(&self) -> bool {
        self.index >= self.lines.len()
    }

    /// Whether the last line was followed by a line break
    pub fn terminated(&self) -> bool {
        self.terminated
    }

    /// Leading whitespace run of the current line
    pub fn peek_indent(&self) -> &'a str {
        self.current().map_or("", |l| split_indent(l).0)
    }

    /// Current line without its leading whitespace run
    pub fn peek_content(&self) -> &'a str {
        self.current().map_or("", |l| split_indent(l).1)
    }

    pub fn peek_kind(&self) -> LineKind<'a> {
        match self.current() {
            Some(l) => LineKind::of(split_indent(l).1),
            None => LineKind::EndOfInput,
        }
    }

    /// Returns the current raw line and advances
    pub fn consume(&mut self) -> Result<&'a str, LexicalError> {
        let line = self
            .current()
            .ok_or(LexicalError::OutOfInput(self.index + 1))?;
        self.index += 1;
        Ok(line)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        !self.at_end() && self.peek_content().starts_with(prefix)
    }

    pub fn consume_if_starts_with(&mut self, prefix: &str) -> bool {
        if self.starts_with(prefix) {
            self.index += 1;
            return true;
        }
        false
    }

    #[inline]
    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.index).copied()
    }
}

/// Splits a line into its leading whitespace run and the rest
#[inline]
pub fn split_indent(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| !c.is_whitespace())
        .unwrap_or(line.len());
    line.split_at(end)
}
