//! Editable sample and hidden test collections with per-row JSON errors.
//!
//! Each row keeps the author's raw `input`/`expected` text next to the last
//! successfully parsed value. Parse failures are recorded by row index and
//! must follow their row when an earlier row is removed.

use std::collections::BTreeMap;

use lab_core::entities::{Comparator, TestCase};
use lab_core::enums::TestSuiteKind;
use lab_core::json_text::{format_object, parse_object};

pub const INPUT_JSON_ERROR: &str = "Input must be valid JSON object";
pub const EXPECTED_JSON_ERROR: &str = "Expected must be valid JSON object";

/// One test case being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCaseRow {
    /// Last valid state of the case. `input`/`expected` lag behind the text
    /// while the text does not parse.
    pub case: TestCase,
    pub input_text: String,
    pub expected_text: String,
}

impl TestCaseRow {
    #[must_use]
    pub fn from_case(case: TestCase) -> Self {
        let input_text = format_object(&case.input);
        let expected_text = format_object(&case.expected);
        Self {
            case,
            input_text,
            expected_text,
        }
    }

    /// Messages for whichever of the two texts does not parse.
    #[must_use]
    pub fn json_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if parse_object(&self.input_text).is_err() {
            errors.push(INPUT_JSON_ERROR.to_string());
        }
        if parse_object(&self.expected_text).is_err() {
            errors.push(EXPECTED_JSON_ERROR.to_string());
        }
        errors
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Collection {
    rows: Vec<TestCaseRow>,
    errors: BTreeMap<usize, Vec<String>>,
}

impl Collection {
    fn remove(&mut self, index: usize) -> Option<TestCaseRow> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);

        let shifted = std::mem::take(&mut self.errors)
            .into_iter()
            .filter(|(row, _)| *row != index)
            .map(|(row, messages)| if row > index { (row - 1, messages) } else { (row, messages) })
            .collect();
        self.errors = shifted;

        Some(removed)
    }

    fn set_errors(&mut self, index: usize, errors: Vec<String>) {
        if errors.is_empty() {
            self.errors.remove(&index);
        } else {
            self.errors.insert(index, errors);
        }
    }

    fn revalidate(&mut self, index: usize) {
        if let Some(row) = self.rows.get(index) {
            let errors = row.json_errors();
            self.set_errors(index, errors);
        }
    }
}

/// Sample and hidden test rows plus their recorded JSON errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestSuiteState {
    sample: Collection,
    hidden: Collection,
}

impl TestSuiteState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a suite from loaded tests. Cases are normalized on the way in.
    #[must_use]
    pub fn from_tests(sample: Vec<TestCase>, hidden: Vec<TestCase>) -> Self {
        let mut suite = Self::new();
        suite.replace(TestSuiteKind::Sample, sample);
        suite.replace(TestSuiteKind::Hidden, hidden);
        suite
    }

    const fn collection(&self, kind: TestSuiteKind) -> &Collection {
        match kind {
            TestSuiteKind::Sample => &self.sample,
            TestSuiteKind::Hidden => &self.hidden,
        }
    }

    const fn collection_mut(&mut self, kind: TestSuiteKind) -> &mut Collection {
        match kind {
            TestSuiteKind::Sample => &mut self.sample,
            TestSuiteKind::Hidden => &mut self.hidden,
        }
    }

    /// Replace every row of `kind`, dropping its recorded errors.
    pub fn replace(&mut self, kind: TestSuiteKind, tests: Vec<TestCase>) {
        let collection = self.collection_mut(kind);
        collection.rows = tests
            .into_iter()
            .map(|case| TestCaseRow::from_case(case.normalized()))
            .collect();
        collection.errors.clear();
    }

    /// Append a blank `deepEqual` case named after the collection. Returns its index.
    pub fn add(&mut self, kind: TestSuiteKind) -> usize {
        let collection = self.collection_mut(kind);
        collection
            .rows
            .push(TestCaseRow::from_case(TestCase::new_io(kind.default_case_name())));
        collection.rows.len() - 1
    }

    /// Delete the row at `index` and shift later error records down by one.
    pub fn remove(&mut self, kind: TestSuiteKind, index: usize) -> Option<TestCase> {
        self.collection_mut(kind).remove(index).map(|row| row.case)
    }

    /// Record messages for one row. An empty list clears the row.
    pub fn set_errors(&mut self, kind: TestSuiteKind, index: usize, errors: Vec<String>) {
        self.collection_mut(kind).set_errors(index, errors);
    }

    #[must_use]
    pub fn errors(&self, kind: TestSuiteKind, index: usize) -> &[String] {
        self.collection(kind)
            .errors
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Row indexes of `kind` that currently carry errors, ascending.
    #[must_use]
    pub fn error_rows(&self, kind: TestSuiteKind) -> Vec<usize> {
        self.collection(kind)
            .errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(row, _)| *row)
            .collect()
    }

    #[must_use]
    pub fn has_any_errors(&self) -> bool {
        [&self.sample, &self.hidden]
            .iter()
            .any(|c| c.errors.values().any(|messages| !messages.is_empty()))
    }

    #[must_use]
    pub fn rows(&self, kind: TestSuiteKind) -> &[TestCaseRow] {
        &self.collection(kind).rows
    }

    #[must_use]
    pub fn len(&self, kind: TestSuiteKind) -> usize {
        self.collection(kind).rows.len()
    }

    #[must_use]
    pub fn is_empty(&self, kind: TestSuiteKind) -> bool {
        self.collection(kind).rows.is_empty()
    }

    /// Edit the input text of a row. The parsed value is adopted only when
    /// the text is a JSON object; the row's errors are recomputed either way.
    ///
    /// Returns `false` when `index` is out of range.
    pub fn set_input_text(&mut self, kind: TestSuiteKind, index: usize, text: &str) -> bool {
        let collection = self.collection_mut(kind);
        let Some(row) = collection.rows.get_mut(index) else {
            return false;
        };
        row.input_text = text.to_string();
        if let Ok(parsed) = parse_object(text) {
            row.case.input = parsed;
        }
        collection.revalidate(index);
        true
    }

    /// Edit the expected text of a row. See [`Self::set_input_text`].
    pub fn set_expected_text(&mut self, kind: TestSuiteKind, index: usize, text: &str) -> bool {
        let collection = self.collection_mut(kind);
        let Some(row) = collection.rows.get_mut(index) else {
            return false;
        };
        row.expected_text = text.to_string();
        if let Ok(parsed) = parse_object(text) {
            row.case.expected = parsed;
        }
        collection.revalidate(index);
        true
    }

    pub fn set_name(&mut self, kind: TestSuiteKind, index: usize, name: &str) -> bool {
        self.update_case(kind, index, |case| case.name = name.to_string())
    }

    pub fn set_comparator(&mut self, kind: TestSuiteKind, index: usize, comparator: Comparator) -> bool {
        self.update_case(kind, index, |case| case.comparator = comparator)
    }

    pub fn set_test_code(&mut self, kind: TestSuiteKind, index: usize, code: Option<String>) -> bool {
        self.update_case(kind, index, |case| case.test_code = code)
    }

    fn update_case(
        &mut self,
        kind: TestSuiteKind,
        index: usize,
        edit: impl FnOnce(&mut TestCase),
    ) -> bool {
        match self.collection_mut(kind).rows.get_mut(index) {
            Some(row) => {
                edit(&mut row.case);
                true
            }
            None => false,
        }
    }

    /// The cases of `kind` as they are sent: normalized, in row order.
    #[must_use]
    pub fn tests(&self, kind: TestSuiteKind) -> Vec<TestCase> {
        self.collection(kind)
            .rows
            .iter()
            .map(|row| row.case.clone().normalized())
            .collect()
    }
}
