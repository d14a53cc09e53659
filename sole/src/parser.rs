use std::path::{Path, PathBuf};

use nom::error::VerboseError;
use tracing::{debug, trace};

use crate::ast::{
    self, Project, Section, Solution, DEFAULT_INDENT, END_GLOBAL, END_PROJECT, GLOBAL,
};
use crate::error::{Result, SolutionError};
use crate::lex::{Lexer, LexicalError, LineKind};
use crate::text::TextFile;

/// Parses solution text that has already been split off its signature and newline style.
///
/// Every line the parser accepts can be printed back byte for byte, lines that cannot
/// are rejected with [`SolutionError::MalformedInput`].
pub fn parse(text: &TextFile, path: &Path) -> Result<Solution> {
    let mut solution = Solution {
        path: path.to_path_buf(),
        newline: text.newline,
        has_bom: text.has_bom,
        ..Default::default()
    };
    let mut parser = Parser::new(text, path);
    parser.header(&mut solution)?;
    parser.projects(&mut solution)?;
    parser.global(&mut solution)?;
    parser.end()?;
    debug!(
        path = %path.display(),
        projects = solution.projects.len(),
        global_sections = solution.global_sections.len(),
        "Solution parsed"
    );
    Ok(solution)
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    path: &'a Path,
    dir: PathBuf,
}

impl<'a> Parser<'a> {
    fn new(text: &'a TextFile, path: &'a Path) -> Self {
        Self {
            lexer: Lexer::new(&text.content, text.newline),
            path,
            dir: ast::parent_of(path).to_path_buf(),
        }
    }

    fn header(&mut self, solution: &mut Solution) -> Result<()> {
        while let LineKind::Text
        | LineKind::SectionOpen(_)
        | LineKind::SectionClose(_)
        | LineKind::ProjectClose
        | LineKind::GlobalClose = self.lexer.peek_kind()
        {
            let line = self.consume()?;
            solution.header.push(line.to_owned());
        }
        Ok(())
    }

    fn projects(&mut self, solution: &mut Solution) -> Result<()> {
        while self.lexer.peek_kind() == LineKind::ProjectOpen {
            let project = self.project()?;
            solution.projects.push(project);
        }
        Ok(())
    }

    fn project(&mut self) -> Result<Project> {
        let line = self.consume()?;
        let (_, begin) = ast::project_begin::<VerboseError<&str>>(line)
            .map_err(|_| self.error("Expected Project Reference"))?;

        let mut project = Project::new(
            begin.type_id,
            begin.name,
            begin.path_or_uri,
            begin.id,
            &self.dir,
        );
        project.line = self.lexer.position();

        loop {
            match self.lexer.peek_kind() {
                LineKind::ProjectClose => {
                    self.expect_literal(END_PROJECT)?;
                    return Ok(project);
                }
                LineKind::EndOfInput => {
                    return Err(self.error_next("Unexpected end of file. Expected EndProject"));
                }
                _ => project.sections.push(self.section()?),
            }
        }
    }

    fn global(&mut self, solution: &mut Solution) -> Result<()> {
        match self.lexer.peek_kind() {
            LineKind::GlobalOpen => self.expect_literal(GLOBAL)?,
            LineKind::EndOfInput => return Err(self.error_next("Global section expected")),
            _ => {
                self.consume()?;
                return Err(self.error("Global section expected"));
            }
        }

        loop {
            match self.lexer.peek_kind() {
                LineKind::GlobalClose => return self.expect_literal(END_GLOBAL),
                LineKind::EndOfInput => {
                    return Err(self.error_next("Unexpected end of file. Expected EndGlobal"));
                }
                _ => solution.global_sections.push(self.section()?),
            }
        }
    }

    /// Same routine for project and global sections
    fn section(&mut self) -> Result<Section> {
        let line = self.consume()?;
        let (_, begin) = ast::section_begin::<VerboseError<&str>>(line)
            .map_err(|_| self.error("Expected Section"))?;

        let mut section = Section {
            line: self.lexer.position(),
            tag_indent: begin.indent.to_owned(),
            tag: begin.tag.to_owned(),
            label: begin.label.to_owned(),
            when: begin.when.to_owned(),
            ..Default::default()
        };
        let mut content_indent: Option<&'a str> = None;

        loop {
            match self.lexer.peek_kind() {
                LineKind::SectionClose(tag) if tag == section.tag => {
                    let close = self.consume()?;
                    if close.strip_prefix(section.tag_indent.as_str())
                        != Some(format!("End{}", section.tag).as_str())
                    {
                        return Err(self.error(&format!(
                            "Expected End{} indented like its opening tag",
                            section.tag
                        )));
                    }
                    break;
                }
                LineKind::EndOfInput => {
                    return Err(self.error_next(&format!(
                        "Unexpected end of file. Expected End{}",
                        section.tag
                    )));
                }
                _ => {
                    let indent = *content_indent.get_or_insert_with(|| self.lexer.peek_indent());
                    let line = self.consume()?;
                    let content = line.strip_prefix(indent).ok_or_else(|| {
                        self.error("Section content is indented less than its first line")
                    })?;
                    section.content.push(content.to_owned());
                }
            }
        }

        section.content_indent = match content_indent {
            Some(indent) => indent.to_owned(),
            None => format!("{}{DEFAULT_INDENT}", section.tag_indent),
        };
        trace!(
            line = section.line,
            tag = %section.tag,
            label = %section.label,
            lines = section.content.len(),
            "Section parsed"
        );
        Ok(section)
    }

    fn end(&mut self) -> Result<()> {
        if !self.lexer.at_end() {
            self.consume()?;
            return Err(self.error("Unexpected content after EndGlobal"));
        }
        if !self.lexer.terminated() {
            return Err(self.error("Expected line break after EndGlobal"));
        }
        Ok(())
    }

    /// Consumes a structural line that must be exactly `literal` to be printed back unchanged
    fn expect_literal(&mut self, literal: &str) -> Result<()> {
        let line = self.consume()?;
        if line != literal {
            return Err(self.error(&format!("Expected {literal}")));
        }
        Ok(())
    }

    fn consume(&mut self) -> Result<&'a str> {
        self.lexer.consume().map_err(|e| match e {
            LexicalError::OutOfInput(line) => SolutionError::MalformedInput {
                path: self.path.to_path_buf(),
                line,
                message: e.to_string(),
            },
        })
    }

    /// Error at the line consumed last
    fn error(&self, message: &str) -> SolutionError {
        self.error_at(self.lexer.position(), message)
    }

    /// Error at the line that was expected next
    fn error_next(&self, message: &str) -> SolutionError {
        self.error_at(self.lexer.position() + 1, message)
    }

    fn error_at(&self, line: usize, message: &str) -> SolutionError {
        SolutionError::MalformedInput {
            path: self.path.to_path_buf(),
            line,
            message: message.to_owned(),
        }
    }
}
