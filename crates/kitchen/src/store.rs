use pantryplan_shared::meal::{Meal, Pantry};
use serde::{Deserialize, Serialize};

/// Everything a kitchen persists. The plan and shopping list are derived
/// and never stored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PersistedState {
    #[serde(default)]
    pub meals: Vec<Meal>,
    #[serde(default)]
    pub pantry: Pantry,
}

/// Persistence collaborator of a [`Kitchen`](crate::Kitchen).
///
/// `load` never fails: an implementation that cannot produce a state
/// returns the empty one.
pub trait Store {
    fn load(&self) -> PersistedState;

    fn save(&mut self, state: &PersistedState) -> pantryplan_shared::Result<()>;
}

/// Keeps the state in memory only.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    state: PersistedState,
    saves: usize,
}

impl MemoryStore {
    pub fn new(state: PersistedState) -> Self {
        Self { state, saves: 0 }
    }

    pub fn state(&self) -> &PersistedState {
        &self.state
    }

    /// How many times the state has been saved.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl Store for MemoryStore {
    fn load(&self) -> PersistedState {
        self.state.clone()
    }

    fn save(&mut self, state: &PersistedState) -> pantryplan_shared::Result<()> {
        self.state = state.clone();
        self.saves += 1;

        Ok(())
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn load(&self) -> PersistedState {
        (**self).load()
    }

    fn save(&mut self, state: &PersistedState) -> pantryplan_shared::Result<()> {
        (**self).save(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_accepts_missing_fields() {
        let state: PersistedState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn test_state_shape() {
        let state = PersistedState {
            meals: vec![Meal::parse("Tacos", "beef, cheese").unwrap()],
            pantry: ["cheese"].into_iter().collect(),
        };

        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            serde_json::json!({
                "meals": [{"name": "Tacos", "ingredients": ["beef", "cheese"]}],
                "pantry": ["cheese"],
            })
        );
    }

    #[test]
    fn test_memory_store_counts_saves() {
        let mut store = MemoryStore::default();
        store.save(&PersistedState::default()).unwrap();
        store.save(&PersistedState::default()).unwrap();
        assert_eq!(store.saves(), 2);
    }
}
