//! Non-fatal conversion warnings.

use indexmap::IndexSet;

/// Insertion-ordered, de-duplicated warnings collected during one pass.
#[derive(Debug, Clone, Default)]
pub struct Warnings {
    messages: IndexSet<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning. Repeated messages are kept once.
    pub fn add(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.messages.contains(&message) {
            tracing::debug!(warning = %message, "conversion warning");
            self.messages.insert(message);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.messages.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warnings_are_deduplicated_in_order() {
        let mut warnings = Warnings::new();
        warnings.add("b");
        warnings.add("a");
        warnings.add("b");
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings.into_vec(), vec!["b".to_string(), "a".to_string()]);
    }
}
