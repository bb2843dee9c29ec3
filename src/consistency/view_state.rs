/// Locally held copy of server-owned data.
///
/// The only way to change it is [`ViewState::replace`], which swaps in a whole
/// new snapshot. There is no in-place mutation, so the value is always exactly
/// what the server last returned.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            value: None,
            generation: 0,
        }
    }
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loaded(value: T) -> Self {
        Self {
            value: Some(value),
            generation: 1,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.value.is_some()
    }

    /// Counts replacements; lets callers tell whether a refetch landed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn replace(&mut self, value: T) {
        self.value = Some(value);
        self.generation += 1;
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_swaps_whole_value() {
        let mut state = ViewState::loaded(vec!["alice".to_string(), "bob".to_string()]);
        state.replace(vec!["carol".to_string()]);

        assert_eq!(state.get(), Some(&vec!["carol".to_string()]));
        assert_eq!(state.generation(), 2);
    }

    #[test]
    fn test_new_state_is_empty() {
        let mut state: ViewState<u8> = ViewState::new();
        assert!(!state.is_loaded());

        state.replace(1);
        state.clear();
        assert_eq!(state.get(), None);
        assert_eq!(state.generation(), 2);
    }
}
