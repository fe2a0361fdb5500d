//! CLI pipe ids that receive widget notifications.

/// Attached `listen` pipes, in attach order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipeListeners {
    ids: Vec<String>,
}

impl PipeListeners {
    /// Attaches `pipe_id`. Returns `false` when it is already attached.
    pub fn attach(&mut self, pipe_id: &str) -> bool {
        if self.ids.iter().any(|id| id == pipe_id) {
            return false;
        }
        self.ids.push(pipe_id.to_string());
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reattaching_the_same_pipe_is_ignored() {
        let mut listeners = PipeListeners::default();
        assert!(listeners.attach("cli-1"));
        assert!(!listeners.attach("cli-1"));
        assert!(listeners.attach("cli-2"));

        assert_eq!(listeners.len(), 2);
        assert_eq!(listeners.iter().collect::<Vec<_>>(), vec!["cli-1", "cli-2"]);
    }

    #[test]
    fn starts_empty() {
        let listeners = PipeListeners::default();
        assert!(listeners.is_empty());
        assert_eq!(listeners.iter().count(), 0);
    }
}
