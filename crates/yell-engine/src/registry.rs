use std::collections::HashMap;
use yell_types::CallerState;

/// Process-lifetime table of caller states, keyed by caller identity.
///
/// Entries are created on first sight and never removed; their number is
/// bounded by the number of distinct call sites.
#[derive(Debug, Clone, Default)]
pub struct CallerRegistry {
    callers: HashMap<String, CallerState>,
}

impl CallerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, identity: &str) -> Option<&CallerState> {
        self.callers.get(identity)
    }

    pub fn get_or_create(&mut self, identity: &str) -> &mut CallerState {
        self.callers
            .entry(identity.to_string())
            .or_insert_with(|| CallerState::new(identity))
    }

    /// Pre-seed a caller. An entry that already exists is left untouched, so
    /// registration has to happen before the first call from that identity.
    /// Returns whether the state was inserted.
    pub fn register(&mut self, state: CallerState) -> bool {
        if self.callers.contains_key(&state.identity) {
            log::debug!("caller '{}' already registered, keeping it", state.identity);
            return false;
        }
        self.callers.insert(state.identity.clone(), state);
        true
    }

    /// Unknown identities are enabled.
    pub fn is_enabled(&self, identity: &str) -> bool {
        self.callers.get(identity).is_none_or(|c| c.enabled)
    }

    pub fn len(&self) -> usize {
        self.callers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CallerState> {
        self.callers.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_lazy() {
        let mut registry = CallerRegistry::new();
        assert!(registry.get("main").is_none());
        registry.get_or_create("main").total_calls += 1;
        registry.get_or_create("main").total_calls += 1;
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("main").map(|c| c.total_calls), Some(2));
    }

    #[test]
    fn test_register_does_not_overwrite() {
        let mut registry = CallerRegistry::new();
        registry.get_or_create("worker").total_calls = 5;

        let inserted = registry.register(CallerState::with_settings("worker", false, 3));
        assert!(!inserted);
        let worker = registry.get("worker").unwrap();
        assert!(worker.enabled);
        assert_eq!(worker.total_calls, 5);
    }

    #[test]
    fn test_is_enabled_defaults_to_true() {
        let mut registry = CallerRegistry::new();
        assert!(registry.is_enabled("anything"));
        registry.register(CallerState::with_settings("quiet", false, 1));
        assert!(!registry.is_enabled("quiet"));
    }
}
