//! Typed employee list filter
//!
//! The list endpoint's ad-hoc query parameters are compiled here into a
//! parameterized WHERE clause: exact-match clauses joined by AND, plus an
//! optional case-insensitive substring disjunction for the search term.
//! Keeping this a plain value makes the search semantics testable without
//! touching the storage engine.

use shared::EmployeeListQuery;

/// Conjunctive filter over the employee table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFilter {
    pub department: Option<String>,
    pub designation: Option<String>,
    pub gender: Option<String>,
    pub search: Option<String>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EmployeeFilter {
    /// Build a filter from raw query parameters; empty fields narrow nothing
    pub fn from_query(query: &EmployeeListQuery) -> Self {
        Self {
            department: non_empty(&query.department),
            designation: non_empty(&query.designation),
            gender: non_empty(&query.gender),
            search: non_empty(&query.search),
        }
    }

    /// Compile to `(where_clause, parameters)` with `?` placeholders
    ///
    /// The search term is lowercased once here and compared against
    /// lowercased columns via `instr`, so matching is substring and
    /// case-insensitive with no LIKE-escaping concerns.
    pub fn where_clause(&self) -> (String, Vec<String>) {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<String> = Vec::new();

        for (column, value) in [
            ("department", &self.department),
            ("designation", &self.designation),
            ("gender", &self.gender),
        ] {
            if let Some(v) = value {
                conditions.push(format!("{column} = ?"));
                params.push(v.clone());
            }
        }

        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            conditions.push(
                "(instr(lower(full_name), ?) > 0 \
                 OR instr(lower(email), ?) > 0 \
                 OR instr(lower(department), ?) > 0)"
                    .to_string(),
            );
            params.push(needle.clone());
            params.push(needle.clone());
            params.push(needle);
        }

        let where_clause = if conditions.is_empty() {
            "1=1".to_string()
        } else {
            conditions.join(" AND ")
        };

        (where_clause, params)
    }
}
