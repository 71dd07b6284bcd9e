use crate::models::PageRequest;

/// Ordered query-string parameters.
///
/// Absent values are skipped on insertion, so a key without a value never
/// reaches the URL. Values are kept as strings; numbers are rendered in
/// decimal by their `Display` impl.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// `page` and `size` only; used by routes that don't accept a sort key.
    pub fn paged(self, request: &PageRequest) -> Self {
        self.push("page", request.page).push("size", request.size)
    }

    /// `page`, `size`, and `sortBy` when one was requested.
    pub fn paged_sorted(self, request: &PageRequest) -> Self {
        self.paged(request)
            .push_opt("sortBy", request.sort_by.as_deref())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> Vec<&str> {
        self.pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
