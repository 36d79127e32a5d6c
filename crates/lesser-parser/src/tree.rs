use indexmap::IndexMap;

/// Property name to raw value, in declaration order.
pub type Properties = IndexMap<String, String>;

/// The result of parsing: variables and selector rules.
///
/// Keys are unique. A repeated declaration overwrites the earlier value but
/// keeps the position of the first one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseTree {
    /// Variable name (including the leading `@`) to raw value.
    pub variables: IndexMap<String, String>,
    /// Selector name to its properties.
    pub rules: IndexMap<String, Properties>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn rule(&self, selector: &str) -> Option<&Properties> {
        self.rules.get(selector)
    }

    /// Raw value of `property` inside `selector`.
    pub fn property(&self, selector: &str, property: &str) -> Option<&str> {
        self.rules
            .get(selector)
            .and_then(|props| props.get(property))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.rules.is_empty()
    }
}
