//! Value access on repeated string elements of MSBuild project files.
//!
//! MSBuild allows the same property element to be repeated and honors only the last one,
//! so every getter here reads the last element and every setter replaces it,
//! adding a new element only when there is none. Multi-valued properties such as
//! `DisableSpecificWarnings` keep their values in one element separated by `;`.

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;

/// Joins values of a delimited property
pub const LIST_SEPARATOR: &str = ";";

/// Start of the condition that selects a configuration, e.g.
/// `'$(Configuration)|$(Platform)'=='Release|Win32'`
pub const CONFIGURATION_CONDITION: &str = "'$(Configuration)|$(Platform)'=='";

static LIST_DELIMITER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*;\s*").unwrap());

/// Ordered elements with the same name inside one parent element.
///
/// Implemented by whatever object model holds the project file.
pub trait ElementList {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&str>;

    /// Replaces the value of an existing element keeping its position
    fn replace(&mut self, index: usize, value: String);

    /// Adds a new element after the existing ones
    fn push(&mut self, value: String);
}

impl ElementList for Vec<String> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.as_slice().get(index).map(String::as_str)
    }

    fn replace(&mut self, index: usize, value: String) {
        if let Some(slot) = self.get_mut(index) {
            *slot = value;
        }
    }

    fn push(&mut self, value: String) {
        Vec::push(self, value);
    }
}

/// Value of the last element
pub fn string<L: ElementList + ?Sized>(elements: &L) -> Option<&str> {
    let n = elements.len();
    if n == 0 {
        return None;
    }
    elements.get(n - 1)
}

/// Replaces the value of the last element or adds one if there is none
pub fn set<L: ElementList + ?Sized, S: Into<String>>(elements: &mut L, value: S) {
    let n = elements.len();
    if n == 0 {
        elements.push(value.into());
    } else {
        elements.replace(n - 1, value.into());
    }
}

/// Values of the last element split on `;` with surrounding whitespace removed
pub fn list<L: ElementList + ?Sized>(elements: &L) -> Vec<&str> {
    split(string(elements).unwrap_or_default(), &LIST_DELIMITER)
}

/// Stores `values` joined with `;` in the last element
pub fn set_list<L, I, S>(elements: &mut L, values: I)
where
    L: ElementList + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = join(values, LIST_SEPARATOR);
    set(elements, joined);
}

/// `'$(Configuration)|$(Platform)'=='CONFIG'`
#[must_use]
pub fn configuration_condition(configuration: &str) -> String {
    format!("{CONFIGURATION_CONDITION}{configuration}'")
}

/// First component whose attribute equals `value`, e.g. an `ItemGroup` by its `Label`
pub fn component<'a, T, I, F>(value: &str, components: I, attribute: F) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Option<&str>,
    T: 'a,
{
    components
        .into_iter()
        .find(|c| attribute(c) == Some(value))
}

/// First component whose condition selects `configuration` like `Release|x64`
pub fn config_component<'a, T, I, F>(configuration: &str, components: I, condition: F) -> Option<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> Option<&str>,
    T: 'a,
{
    component(&configuration_condition(configuration), components, condition)
}

/// Mutable list view of a delimited property value.
///
/// Every change is written back into the last element immediately.
pub struct DelimitedList<'a, L: ElementList + ?Sized> {
    elements: &'a mut L,
    delimiter: &'a Regex,
    separator: &'a str,
}

impl<'a, L: ElementList + ?Sized> DelimitedList<'a, L> {
    /// View with the usual `;` separator
    pub fn new(elements: &'a mut L) -> Self {
        Self {
            elements,
            delimiter: &LIST_DELIMITER,
            separator: LIST_SEPARATOR,
        }
    }

    /// View splitting on `delimiter` and joining with `separator`
    pub fn with_delimiter(elements: &'a mut L, delimiter: &'a Regex, separator: &'a str) -> Self {
        Self {
            elements,
            delimiter,
            separator,
        }
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        split(string(&*self.elements).unwrap_or_default(), self.delimiter)
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.to_vec().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<String> {
        self.to_vec().into_iter().nth(index)
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.to_vec().iter().any(|v| v == value)
    }

    /// Replaces value at `index` and returns the old one. Nothing changes if `index` is out of range
    pub fn set(&mut self, index: usize, value: &str) -> Option<String> {
        let mut values = self.to_vec();
        let old = std::mem::replace(values.get_mut(index)?, value.to_owned());
        self.store(&values);
        Some(old)
    }

    /// Inserts value at `index` or appends it if `index` is past the end
    pub fn insert(&mut self, index: usize, value: &str) {
        let mut values = self.to_vec();
        let index = index.min(values.len());
        values.insert(index, value.to_owned());
        self.store(&values);
    }

    pub fn push(&mut self, value: &str) {
        let mut values = self.to_vec();
        values.push(value.to_owned());
        self.store(&values);
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        let mut values = self.to_vec();
        if index >= values.len() {
            return None;
        }
        let removed = values.remove(index);
        self.store(&values);
        Some(removed)
    }

    fn store(&mut self, values: &[String]) {
        let joined = join(values, self.separator);
        set(&mut *self.elements, joined);
    }
}

/// Splits delimited value. Empty values at the end are dropped
fn split<'s>(value: &'s str, delimiter: &Regex) -> Vec<&'s str> {
    let mut values: Vec<&str> = delimiter.split(value).collect();
    while values.last().is_some_and(|v| v.is_empty()) {
        values.pop();
    }
    values
}

fn join<I, S>(values: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| v.as_ref().to_owned())
        .join(separator)
}
