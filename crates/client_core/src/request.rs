/// Free-form query options for collection endpoints: ordered key/value
/// parameters plus repeated `sort` clauses rendered last, matching the
/// backend's expectations.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    params: Vec<(String, String)>,
    sort: Vec<String>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Absent values are filtered out instead of rendered as empty
    /// parameters.
    pub fn param_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Adds a sort clause such as `nome,asc`. Clauses repeat in order.
    pub fn sort(mut self, clause: impl Into<String>) -> Self {
        self.sort.push(clause.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty() && self.sort.is_empty()
    }

    /// Renders the options as URL query pairs.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = self.params.clone();
        for clause in &self.sort {
            pairs.push(("sort".into(), clause.clone()));
        }
        pairs
    }
}
