//! Filter options and selection state.
//!
//! The three category labels are fixed; their normalized forms are the keys
//! used to look up sections in the endpoint response.

/// A category the user may select to control which part of the response is
/// displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOption {
    Alphabets,
    Numbers,
    HighestLowercaseAlphabet,
}

impl FilterOption {
    /// Get all filter options in their fixed enumeration order.
    pub const fn all() -> &'static [FilterOption] {
        &[Self::Alphabets, Self::Numbers, Self::HighestLowercaseAlphabet]
    }

    /// Get the display label for UI.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Alphabets => "Alphabets",
            Self::Numbers => "Numbers",
            Self::HighestLowercaseAlphabet => "Highest lowercase alphabet",
        }
    }

    /// Get the normalized response lookup key.
    ///
    /// Must equal [`normalize_label`] applied to [`FilterOption::label`].
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Alphabets => "alphabets",
            Self::Numbers => "numbers",
            Self::HighestLowercaseAlphabet => "highest_lowercase_alphabet",
        }
    }
}

/// Normalize a filter label to its response lookup key: lowercase, with
/// spaces joined by underscores.
pub fn normalize_label(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

/// Insertion-ordered, duplicate-free set of selected filter options.
///
/// Render order follows toggle order, not the fixed enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    options: Vec<FilterOption>,
}

impl FilterSelection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a checkbox change: checked inserts the option at the end of the
    /// selection (no-op when already present), unchecked removes it.
    pub fn toggle(&mut self, option: FilterOption, checked: bool) {
        if checked {
            if !self.contains(option) {
                self.options.push(option);
            }
        } else {
            self.options.retain(|selected| *selected != option);
        }
    }

    /// Whether the option is currently selected.
    pub fn contains(&self, option: FilterOption) -> bool {
        self.options.contains(&option)
    }

    /// Selected options in toggle order.
    pub fn iter(&self) -> impl Iterator<Item = FilterOption> + '_ {
        self.options.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_normalized_labels() {
        for option in FilterOption::all() {
            assert_eq!(option.key(), normalize_label(option.label()));
        }
    }

    #[test]
    fn test_keys_are_distinct() {
        assert_eq!(FilterOption::Alphabets.key(), "alphabets");
        assert_eq!(FilterOption::Numbers.key(), "numbers");
        assert_eq!(
            FilterOption::HighestLowercaseAlphabet.key(),
            "highest_lowercase_alphabet"
        );
    }

    #[test]
    fn test_toggle_on_then_off_restores_prior_state() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterOption::Numbers, true);
        let before = selection.clone();

        selection.toggle(FilterOption::Alphabets, true);
        selection.toggle(FilterOption::Alphabets, false);

        assert_eq!(selection, before);
    }

    #[test]
    fn test_toggle_is_duplicate_insensitive() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterOption::Alphabets, true);
        selection.toggle(FilterOption::Alphabets, true);

        assert_eq!(selection.len(), 1);

        selection.toggle(FilterOption::Alphabets, false);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_iteration_follows_toggle_order() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterOption::HighestLowercaseAlphabet, true);
        selection.toggle(FilterOption::Alphabets, true);

        let ordered: Vec<_> = selection.iter().collect();
        assert_eq!(
            ordered,
            vec![
                FilterOption::HighestLowercaseAlphabet,
                FilterOption::Alphabets
            ]
        );
    }

    #[test]
    fn test_untoggling_absent_option_is_noop() {
        let mut selection = FilterSelection::new();
        selection.toggle(FilterOption::Numbers, false);
        assert!(selection.is_empty());
    }
}
