/*!
A library for editing Microsoft Visual Studio solution files without disturbing them.

Parsing a solution and printing it back gives the original text byte for byte: header lines,
indentation, line endings and UTF-8 signature are all kept. Edits change only what they touch.

## Example: parsing and editing solution from [&str]

```
use sole::parse_str;

const SOLUTION: &str = r#"
Microsoft Visual Studio Solution File, Format Version 12.00
Project("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}") = "bench", "bench\bench.csproj", "{A61CD222-0F3B-47B6-9F7F-25D658368EEC}"
EndProject
Global
    GlobalSection(SolutionConfigurationPlatforms) = preSolution
        Debug|Any CPU = Debug|Any CPU
        Release|Any CPU = Release|Any CPU
    EndGlobalSection
    GlobalSection(SolutionProperties) = preSolution
        HideSolutionNode = FALSE
    EndGlobalSection
EndGlobal
"#;

let mut solution = parse_str(SOLUTION).unwrap();
assert_eq!(solution.projects.len(), 1);
assert_eq!(solution.configurations().len(), 2);
assert_eq!(solution.to_string(), SOLUTION);

let properties = solution
    .global_section_mut("SolutionProperties", "preSolution")
    .unwrap();
properties.content[0] = "HideSolutionNode = TRUE".to_owned();
assert_eq!(
    solution.to_string(),
    SOLUTION.replace("HideSolutionNode = FALSE", "HideSolutionNode = TRUE")
);
```
*/

#![warn(unused_extern_crates)]
#![allow(clippy::missing_errors_doc)]
use std::path::{self, Path, PathBuf};

use jwalk::{Parallelism, WalkDir};
use tracing::{debug, warn};

pub mod api;
pub mod ast;
pub mod error;
pub mod lex;
pub mod msbuild;
mod parser;
mod print;
pub mod props;
pub mod text;

#[cfg(test)]
mod fixtures;

#[cfg(test)] // <-- not needed in integration tests
extern crate rstest;

pub use api::ProjectIndex;
pub use ast::{Conf, Project, Section, Solution};
pub use error::{Result, SolutionError};
pub use text::{LineEnding, TextFile};

/// Consume provides parsed [`Solution`] consumer
pub trait Consume {
    /// Called in case of success parsing
    fn ok(&mut self, solution: &Solution);
    /// Called on error
    fn err(&self, path: &Path);
}

/// `parse_str` parses solution content from `&str` that has no file behind it.
/// Project paths stay relative.
pub fn parse_str(contents: &str) -> Result<Solution> {
    parse_str_at(contents, "")
}

/// `parse_str` variant that resolves project paths against the directory of `path`
/// and reports `path` in errors
pub fn parse_str_at<P: AsRef<Path>>(contents: &str, path: P) -> Result<Solution> {
    parser::parse(&TextFile::from_text(contents), path.as_ref())
}

/// `read_file` reads and parses single solution file.
///
/// Solution path is made absolute so that project paths are absolute too.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Solution> {
    let path = path.as_ref();
    let path = path::absolute(path).map_err(|e| SolutionError::read(path, e))?;
    let text = TextFile::read(&path)?;
    debug!(
        path = %path.display(),
        newline = %text.newline,
        has_bom = text.has_bom,
        "Solution read"
    );
    parser::parse(&text, &path)
}

/// `parse_file` parses single solution file specified by path and passes it to `consumer`.
///
/// # Errors
///
/// This function will return an error if file content cannot be read into memory
/// or solution file has invalid syntax. `consumer` is notified about it too.
pub fn parse_file<P: AsRef<Path>>(path: P, consumer: &mut dyn Consume) -> Result<()> {
    let path = path.as_ref();
    match read_file(path) {
        Ok(solution) => {
            consumer.ok(&solution);
            Ok(())
        }
        Err(e) => {
            consumer.err(path);
            Err(e)
        }
    }
}

/// `parse_dir` parses only directory specified by path.
/// it finds all files with extension specified and parses them.
/// returns the number of successfully parsed solutions
///
/// ## Remarks
/// Any errors occured during parsing of found files will be ignored (so parsing won't stopped)
/// but error paths will be added into error files list (using err function of [`Consume`] trait)
pub fn parse_dir(path: &str, extension: &str, consumer: &mut dyn Consume) -> usize {
    let iter = create_dir_iterator(path).max_depth(1);
    parse_dir_or_tree(iter, extension, consumer)
}

/// `parse_dir_tree` parses directory specified by path. recursively
/// it finds all files with extension specified and parses them.
/// returns the number of successfully parsed solutions
///
/// ## Remarks
/// Any errors occured during parsing of found files will be ignored (so parsing won't stopped)
/// but error paths will be added into error files list (using err function of [`Consume`] trait)
pub fn parse_dir_tree(path: &str, extension: &str, consumer: &mut dyn Consume) -> usize {
    let parallelism = Parallelism::RayonNewPool(num_cpus::get_physical());
    let iter = create_dir_iterator(path).parallelism(parallelism);
    parse_dir_or_tree(iter, extension, consumer)
}

fn create_dir_iterator(path: &str) -> WalkDir {
    let root = decorate_path(path);
    WalkDir::new(root).skip_hidden(false).follow_links(false)
}

fn parse_dir_or_tree(iter: WalkDir, extension: &str, consumer: &mut dyn Consume) -> usize {
    let ext = extension.trim_start_matches('.');

    iter.into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|f| f.file_type().is_file())
        .map(|f| f.path())
        .filter(|p| p.extension().is_some_and(|s| s == ext))
        .filter_map(|p: PathBuf| match parse_file(&p, consumer) {
            Ok(()) => Some(()),
            Err(e) => {
                warn!(path = %p.display(), error = %e, "Solution skipped");
                None
            }
        })
        .count()
}

/// On Windows trailing back slash (\) to be added if volume and colon passed (like c:).
/// It needed paths look to be more pleasant
#[cfg(target_os = "windows")]
fn decorate_path(path: &str) -> String {
    if path.len() == 2 && path.ends_with(':') {
        format!("{path}\\")
    } else {
        path.to_owned()
    }
}

/// On Unix just passthrough as is
#[cfg(not(target_os = "windows"))]
fn decorate_path(path: &str) -> String {
    path.to_owned()
}
