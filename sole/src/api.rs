use std::collections::HashMap;
use std::fs;
use std::path::Path;

use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::ast::{self, Conf, Project, Section, Solution, DEPENDENCIES_LABEL};
use crate::error::{Result, SolutionError};
use crate::msbuild;

const SOLUTION_CONFIGURATIONS: &str = "SolutionConfigurationPlatforms";
const DEPENDENCIES_WHEN: &str = "postProject";

impl Solution {
    /// Finds project by its identifier
    #[must_use]
    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    /// Iterates all but solution folder projects
    pub fn iterate_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| !p.is_solution_folder())
    }

    /// First global section with the `(label, when)` key. The key is not unique in real files
    #[must_use]
    pub fn global_section(&self, label: &str, when: &str) -> Option<&Section> {
        self.global_sections
            .iter()
            .find(|s| s.label == label && s.when == when)
    }

    pub fn global_section_mut(&mut self, label: &str, when: &str) -> Option<&mut Section> {
        self.global_sections
            .iter_mut()
            .find(|s| s.label == label && s.when == when)
    }

    /// Appends project after the last one
    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Removes the project with `id`. Dependencies on it stay as they are
    pub fn remove_project(&mut self, id: &str) -> Option<Project> {
        let ix = self.projects.iter().position(|p| p.id == id)?;
        Some(self.projects.remove(ix))
    }

    pub fn add_global_section(&mut self, section: Section) {
        self.global_sections.push(section);
    }

    /// Removes the first global section with the `(label, when)` key
    pub fn remove_global_section(&mut self, label: &str, when: &str) -> Option<Section> {
        let ix = self
            .global_sections
            .iter()
            .position(|s| s.label == label && s.when == when)?;
        Some(self.global_sections.remove(ix))
    }

    /// Solution's configuration/platform pairs in file order
    #[must_use]
    pub fn configurations(&self) -> Vec<Conf<'_>> {
        self.global_sections
            .iter()
            .find(|s| s.label == SOLUTION_CONFIGURATIONS)
            .map(|s| {
                s.content
                    .iter()
                    .map(|line| Conf::from(ast::content_key(line)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Identifier index over all projects
    #[must_use]
    pub fn index(&self) -> ProjectIndex<'_> {
        ProjectIndex::new(self)
    }

    /// Projects `project` depends on in the order they are listed.
    ///
    /// # Errors
    ///
    /// [`SolutionError::UnresolvedReference`] for the first identifier that names no project.
    /// Use [`ProjectIndex::resolve`] to resolve many projects with one index
    pub fn dependencies_of(&self, project: &Project) -> Result<Vec<&Project>> {
        self.index().resolve(project)
    }

    /// Directed graph from every project to the projects it depends on.
    /// Identifiers without a project become nodes too, cycles are kept.
    #[must_use]
    pub fn dependency_graph(&self) -> DiGraphMap<&str, ()> {
        let mut graph = DiGraphMap::new();
        for project in &self.projects {
            graph.add_node(project.id.as_str());
            for dependency in project.dependencies() {
                graph.add_edge(project.id.as_str(), dependency, ());
            }
        }
        graph
    }

    /// Writes printed solution to `path`
    ///
    /// # Errors
    ///
    /// [`SolutionError::IoFailure`] if the file cannot be written
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_string()).map_err(|e| SolutionError::write(path, e))?;
        debug!(path = %path.display(), "Solution saved");
        Ok(())
    }
}

impl Project {
    /// First project section with `label`
    #[must_use]
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.label == label)
    }

    pub fn section_mut(&mut self, label: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.label == label)
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn remove_section(&mut self, label: &str) -> Option<Section> {
        let ix = self.sections.iter().position(|s| s.label == label)?;
        Some(self.sections.remove(ix))
    }

    /// Identifiers listed in all `ProjectDependencies` sections in file order
    #[must_use]
    pub fn dependencies(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.label == DEPENDENCIES_LABEL)
            .flat_map(|s| s.content.iter().map(|l| ast::content_key(l)))
            .collect()
    }

    /// Adds `id = id` line to the first dependencies section creating it if necessary.
    /// Returns false if `id` already listed
    pub fn add_dependency(&mut self, id: &str) -> bool {
        if self.dependencies().contains(&id) {
            return false;
        }
        if self.section(DEPENDENCIES_LABEL).is_none() {
            self.add_section(Section::project(DEPENDENCIES_LABEL, DEPENDENCIES_WHEN));
        }
        if let Some(section) = self.section_mut(DEPENDENCIES_LABEL) {
            section.push_line(format!("{id} = {id}"));
        }
        true
    }

    /// Removes all lines listing `id` from every dependencies section. Empty sections are kept
    pub fn remove_dependency(&mut self, id: &str) -> bool {
        let mut removed = false;
        for section in self
            .sections
            .iter_mut()
            .filter(|s| s.label == DEPENDENCIES_LABEL)
        {
            let before = section.content.len();
            section.content.retain(|l| ast::content_key(l) != id);
            removed |= before != section.content.len();
        }
        removed
    }

    /// Human readable project type like `C#` or `Solution Folder`
    #[must_use]
    pub fn type_description(&self) -> &str {
        msbuild::describe_project(&self.type_id)
    }

    #[must_use]
    pub fn is_solution_folder(&self) -> bool {
        msbuild::is_solution_folder(&self.type_id)
    }
}

impl Section {
    /// Appends content line. It is printed with the section's content indentation
    pub fn push_line<S: Into<String>>(&mut self, line: S) {
        self.content.push(line.into());
    }

    /// Inserts content line at `index` or appends it if `index` is past the end
    pub fn insert_line<S: Into<String>>(&mut self, index: usize, line: S) {
        let index = index.min(self.content.len());
        self.content.insert(index, line.into());
    }

    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        (index < self.content.len()).then(|| self.content.remove(index))
    }

    /// Right side of the first `key = value` content line with `key`
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.content
            .iter()
            .filter_map(|l| l.split_once(" = "))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }
}

/// Projects of one solution by identifier. Built once, then every lookup is O(1)
pub struct ProjectIndex<'a> {
    by_id: HashMap<&'a str, &'a Project>,
}

impl<'a> ProjectIndex<'a> {
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        let mut by_id = HashMap::with_capacity(solution.projects.len());
        for project in &solution.projects {
            by_id.entry(project.id.as_str()).or_insert(project);
        }
        Self { by_id }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'a Project> {
        self.by_id.get(id).copied()
    }

    /// Maps dependency identifiers of `project` to projects.
    ///
    /// # Errors
    ///
    /// [`SolutionError::UnresolvedReference`] naming the missing identifier and `project`
    pub fn resolve(&self, project: &Project) -> Result<Vec<&'a Project>> {
        project
            .dependencies()
            .into_iter()
            .map(|id| {
                self.get(id).ok_or_else(|| SolutionError::UnresolvedReference {
                    id: id.to_owned(),
                    referrer: project.name.clone(),
                })
            })
            .collect()
    }
}
