/// Ordered query-string pairs. Empty values are never emitted.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless the value is empty.
    pub fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        let value = value.to_string();
        if !value.trim().is_empty() {
            self.0.push((key, value));
        }
        self
    }

    /// Append when `Some` and non-empty.
    pub fn push_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Append `key=true` only when the flag is set.
    pub fn flag(self, key: &'static str, on: bool) -> Self {
        if on {
            self.push(key, "true")
        } else {
            self
        }
    }

    /// Append when the number is positive; zero means "server default".
    pub fn positive(self, key: &'static str, value: u32) -> Self {
        if value > 0 {
            self.push(key, value)
        } else {
            self
        }
    }

    pub fn pairs(&self) -> &[(&'static str, String)] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_skipped() {
        let params = QueryParams::new()
            .push("search", "")
            .push("category", "  ")
            .push_opt("role", None::<String>)
            .push_opt("search", Some(""))
            .flag("includeDeactivated", false)
            .positive("page", 0);
        assert!(params.is_empty());
    }

    #[test]
    fn test_order_is_preserved() {
        let params = QueryParams::new()
            .push("last_days", 30)
            .push("limit", 100)
            .flag("includeDeactivated", true)
            .push_opt("entity_type", Some("sku"));
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["last_days", "limit", "includeDeactivated", "entity_type"]);
        assert_eq!(params.get("includeDeactivated"), Some("true"));
    }
}
