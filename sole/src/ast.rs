use std::path::{Path, PathBuf};

use nom::bytes::complete::{is_not, tag, take_while, take_while1};
use nom::character::complete::char;
use nom::combinator::all_consuming;
use nom::error::ParseError;
use nom::sequence::{delimited, terminated, tuple};
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::text::LineEnding;

/// One indentation unit. Used for the content of sections that have no content to sample from.
pub const DEFAULT_INDENT: &str = "\t";
/// Tag keyword of sections nested in a project
pub const PROJECT_SECTION: &str = "ProjectSection";
/// Tag keyword of sections inside `Global`
pub const GLOBAL_SECTION: &str = "GlobalSection";
/// Opens the block of global sections
pub const GLOBAL: &str = "Global";
pub const END_GLOBAL: &str = "EndGlobal";
pub const END_PROJECT: &str = "EndProject";
/// Label of the project section that lists project dependencies
pub const DEPENDENCIES_LABEL: &str = "ProjectDependencies";

/// Represents Visual Studio solution file contents
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Path of the solution file. Empty if parsed from a string without path
    pub path: PathBuf,
    /// Line terminator used when the solution is printed
    pub newline: LineEnding,
    /// Whether the file starts with a UTF-8 signature
    pub has_bom: bool,
    /// Everything before the first project, verbatim
    pub header: Vec<String>,
    /// Solution's projects in file order
    pub projects: Vec<Project>,
    /// Sections inside `Global` ... `EndGlobal` in file order
    pub global_sections: Vec<Section>,
}

/// Represents project inside [`Solution`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// 1-based line of the `Project(` line. Zero for projects created in memory
    pub line: usize,
    pub type_id: String,
    pub name: String,
    /// Path exactly as written in the solution (usually relative with `\` separators)
    pub path_or_uri: String,
    /// `path_or_uri` resolved against solution directory
    pub path: PathBuf,
    pub id: String,
    pub sections: Vec<Section>,
}

/// Delimited block `Tag(Label) = When` ... `EndTag` used both inside projects and inside `Global`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// 1-based line of the opening tag. Zero for sections created in memory
    pub line: usize,
    /// Whitespace in front of the opening and closing tags
    pub tag_indent: String,
    pub tag: String,
    pub label: String,
    pub when: String,
    /// Whitespace in front of every content line
    pub content_indent: String,
    /// Content lines without `content_indent`
    pub content: Vec<String>,
}

/// Solution configuration/platform pair like `Debug|Any CPU`
#[derive(Debug, Copy, Clone, Default, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Conf<'a> {
    pub config: &'a str,
    pub platform: &'a str,
}

impl Project {
    /// Creates project resolving `path_or_uri` against `dir`
    #[must_use]
    pub fn new(
        type_id: &str,
        name: &str,
        path_or_uri: &str,
        id: &str,
        dir: &Path,
    ) -> Self {
        Self {
            line: 0,
            type_id: type_id.to_owned(),
            name: name.to_owned(),
            path_or_uri: path_or_uri.to_owned(),
            path: make_path(dir, path_or_uri),
            id: id.to_owned(),
            sections: Vec::new(),
        }
    }
}

impl Section {
    /// Creates empty section which content is indented one unit deeper than its tags
    #[must_use]
    pub fn new(tag_indent: &str, tag: &str, label: &str, when: &str) -> Self {
        Self {
            line: 0,
            tag_indent: tag_indent.to_owned(),
            tag: tag.to_owned(),
            label: label.to_owned(),
            when: when.to_owned(),
            content_indent: format!("{tag_indent}{DEFAULT_INDENT}"),
            content: Vec::new(),
        }
    }

    /// `ProjectSection(label) = when` indented like Visual Studio writes it
    #[must_use]
    pub fn project(label: &str, when: &str) -> Self {
        Section::new(DEFAULT_INDENT, PROJECT_SECTION, label, when)
    }

    /// `GlobalSection(label) = when` indented like Visual Studio writes it
    #[must_use]
    pub fn global(label: &str, when: &str) -> Self {
        Section::new(DEFAULT_INDENT, GLOBAL_SECTION, label, when)
    }
}

impl<'a> Conf<'a> {
    #[must_use]
    pub fn new(config: &'a str, platform: &'a str) -> Self {
        Self { config, platform }
    }
}

impl<'a> From<&'a str> for Conf<'a> {
    fn from(s: &'a str) -> Self {
        match configuration::<nom::error::Error<&str>>(s) {
            Ok((platform, config)) => Self { config, platform },
            Err(_) => Conf::default(),
        }
    }
}

/// Directory of solution file. Empty path if there is none
#[must_use]
pub fn parent_of(path: &Path) -> &Path {
    path.parent().unwrap_or_else(|| Path::new(""))
}

/// Converts Windows style relative path into native one rooted at `dir`
#[must_use]
#[cfg(not(target_os = "windows"))]
pub fn make_path(dir: &Path, relative: &str) -> PathBuf {
    relative
        .split('\\')
        .fold(PathBuf::from(dir), |pb, s| pb.join(s))
}

#[must_use]
#[cfg(target_os = "windows")]
pub fn make_path(dir: &Path, relative: &str) -> PathBuf {
    PathBuf::from(dir).join(relative)
}

/// Fields of `Project("TYPE") = "NAME", "PATH", "ID"` line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProjectBegin<'a> {
    pub type_id: &'a str,
    pub name: &'a str,
    pub path_or_uri: &'a str,
    pub id: &'a str,
}

/// Fields of `INDENT Tag(Label) = When` line
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SectionBegin<'a> {
    pub indent: &'a str,
    pub tag: &'a str,
    pub label: &'a str,
    pub when: &'a str,
}

/// Matches whole raw project line
pub fn project_begin<'a, E>(input: &'a str) -> IResult<&'a str, ProjectBegin<'a>, E>
where
    E: ParseError<&'a str> + std::fmt::Debug,
{
    let (rest, (type_id, name, path_or_uri, id)) = all_consuming(tuple((
        delimited(tag("Project("), quoted, tag(") = ")),
        terminated(quoted, tag(", ")),
        terminated(quoted, tag(", ")),
        quoted,
    )))(input)?;
    Ok((
        rest,
        ProjectBegin {
            type_id,
            name,
            path_or_uri,
            id,
        },
    ))
}

/// Matches whole raw section opening line
pub fn section_begin<'a, E>(input: &'a str) -> IResult<&'a str, SectionBegin<'a>, E>
where
    E: ParseError<&'a str> + std::fmt::Debug,
{
    let (rest, (indent, tag_name, label, when)) = all_consuming(tuple((
        take_while(char::is_whitespace),
        word,
        delimited(char('('), word, tag(") = ")),
        word,
    )))(input)?;
    Ok((
        rest,
        SectionBegin {
            indent,
            tag: tag_name,
            label,
            when,
        },
    ))
}

fn quoted<'a, E>(input: &'a str) -> IResult<&'a str, &'a str, E>
where
    E: ParseError<&'a str> + std::fmt::Debug,
{
    delimited(char('"'), is_not("\""), char('"'))(input)
}

fn word<'a, E>(input: &'a str) -> IResult<&'a str, &'a str, E>
where
    E: ParseError<&'a str> + std::fmt::Debug,
{
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn configuration<'a, E>(input: &'a str) -> IResult<&'a str, &'a str, E>
where
    E: ParseError<&'a str> + std::fmt::Debug,
{
    terminated(is_not("|"), char('|'))(input)
}

/// Left side of `KEY = VALUE` section content line
#[must_use]
pub fn content_key(line: &str) -> &str {
    line.split_once(" = ").map_or(line, |(key, _)| key)
}
