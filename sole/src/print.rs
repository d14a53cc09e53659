use std::fmt::Display;

use itertools::Itertools;

use crate::ast::{Project, Section, Solution, END_GLOBAL, END_PROJECT, GLOBAL};
use crate::text::BOM;

impl Solution {
    /// Lines of the printed solution. The last one is always empty
    /// so that joining them with the newline string ends the text with a line break.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.header.clone();
        for project in &self.projects {
            project.write_lines(&mut lines);
        }
        lines.push(GLOBAL.to_owned());
        for section in &self.global_sections {
            section.write_lines(&mut lines);
        }
        lines.push(END_GLOBAL.to_owned());
        lines.push(String::new());
        lines
    }
}

impl Project {
    /// `Project("TYPE") = "NAME", "PATH", "ID"` line
    #[must_use]
    pub fn begin_line(&self) -> String {
        format!(
            r#"Project("{}") = "{}", "{}", "{}""#,
            self.type_id, self.name, self.path_or_uri, self.id
        )
    }

    fn write_lines(&self, lines: &mut Vec<String>) {
        lines.push(self.begin_line());
        for section in &self.sections {
            section.write_lines(lines);
        }
        lines.push(END_PROJECT.to_owned());
    }
}

impl Section {
    #[must_use]
    pub fn begin_line(&self) -> String {
        format!(
            "{}{}({}) = {}",
            self.tag_indent, self.tag, self.label, self.when
        )
    }

    #[must_use]
    pub fn end_line(&self) -> String {
        format!("{}End{}", self.tag_indent, self.tag)
    }

    fn write_lines(&self, lines: &mut Vec<String>) {
        lines.push(self.begin_line());
        lines.extend(
            self.content
                .iter()
                .map(|line| format!("{}{line}", self.content_indent)),
        );
        lines.push(self.end_line());
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.has_bom {
            write!(f, "{BOM}")?;
        }
        write!(f, "{}", self.lines().iter().join(self.newline.as_str()))
    }
}
