//! Typed filter builder for question search
//!
//! Search conditions are an ordered list of (field, term) pairs
//! reduced into a parameterized predicate. When more than one
//! condition is supplied they are combined with OR, not AND: a
//! question matches if ANY supplied fragment matches. This is a
//! deliberate behavior of the service, visible here rather than
//! buried in string assembly.

use crate::models::Question;

/// A searchable question column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Title,
    Category,
}

impl SearchField {
    /// Column name in the questions table
    pub fn column(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Category => "category",
        }
    }

    fn value_of<'a>(self, question: &'a Question) -> &'a str {
        match self {
            SearchField::Title => &question.title,
            SearchField::Category => &question.category,
        }
    }
}

/// An ordered set of case-insensitive substring conditions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    terms: Vec<(SearchField, String)>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a title condition
    pub fn title(mut self, term: impl Into<String>) -> Self {
        self.terms.push((SearchField::Title, term.into()));
        self
    }

    /// Add a category condition
    pub fn category(mut self, term: impl Into<String>) -> Self {
        self.terms.push((SearchField::Category, term.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn terms(&self) -> &[(SearchField, String)] {
        &self.terms
    }

    /// Render the filter as a parameterized SQL predicate.
    ///
    /// Returns the predicate text (conditions joined with OR) and the
    /// bind values in placeholder order. Placeholders are numbered
    /// from `first_placeholder`. An empty filter yields an empty
    /// predicate and no bind values; the caller omits the WHERE
    /// clause in that case.
    pub fn predicate_sql(&self, first_placeholder: usize) -> (String, Vec<String>) {
        let mut conditions = Vec::with_capacity(self.terms.len());
        let mut params = Vec::with_capacity(self.terms.len());

        for (index, (field, term)) in self.terms.iter().enumerate() {
            conditions.push(format!(
                "{} ILIKE ${}",
                field.column(),
                first_placeholder + index
            ));
            params.push(format!("%{}%", term));
        }

        (conditions.join(" OR "), params)
    }

    /// Evaluate the filter against a question in memory.
    ///
    /// Matching is case-insensitive substring containment per field,
    /// OR-combined. An empty filter matches everything.
    pub fn matches(&self, question: &Question) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        self.terms.iter().any(|(field, term)| {
            field
                .value_of(question)
                .to_lowercase()
                .contains(&term.to_lowercase())
        })
    }
}
