//! Fuzzy department picker.
//!
//! The picker narrows the catalog's department list as the user types. Matching
//! uses the Skim algorithm on accent-folded text, so `quimica` finds `Química`.
//! Results are ordered by score, best first; departments with equal scores keep
//! their list order.

use super::collation;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// A department that matches the picker query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentMatch {
    pub name: String,
    /// Character ranges `(start, end)` (exclusive end) matched by the query.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Query and cursor of the department picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepartmentPicker {
    pub query: String,
    pub selected: usize,
}

impl DepartmentPicker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.selected = 0;
    }

    /// Moves the cursor down, wrapping to the top.
    pub fn move_down(&mut self, match_count: usize) {
        if match_count > 0 {
            self.selected = (self.selected + 1) % match_count;
        }
    }

    /// Moves the cursor up, wrapping to the bottom.
    pub fn move_up(&mut self, match_count: usize) {
        if match_count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(match_count - 1);
        }
    }

    /// Departments matching the query, best match first.
    ///
    /// An empty query matches everything in list order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pau::listing::DepartmentPicker;
    ///
    /// let departments = vec!["Física".to_string(), "Informática".to_string(), "Química".to_string()];
    /// let mut picker = DepartmentPicker::new();
    /// for c in "quim".chars() {
    ///     picker.push_char(c);
    /// }
    ///
    /// let matches = picker.matches(&departments);
    /// assert_eq!(matches[0].name, "Química");
    /// ```
    #[must_use]
    pub fn matches(&self, departments: &[String]) -> Vec<DepartmentMatch> {
        if self.query.is_empty() {
            return departments
                .iter()
                .map(|name| DepartmentMatch {
                    name: name.clone(),
                    highlight_ranges: Vec::new(),
                })
                .collect();
        }

        let matcher = SkimMatcherV2::default();
        let pattern = collation::fold(&self.query);

        let mut scored: Vec<(i64, DepartmentMatch)> = departments
            .iter()
            .filter_map(|name| {
                matcher
                    .fuzzy_indices(&collation::fold(name), &pattern)
                    .map(|(score, indices)| {
                        (
                            score,
                            DepartmentMatch {
                                name: name.clone(),
                                highlight_ranges: coalesce(&indices),
                            },
                        )
                    })
            })
            .collect();

        scored.sort_by(|(a, _), (b, _)| b.cmp(a));
        scored.into_iter().map(|(_, m)| m).collect()
    }

    /// Department under the cursor, if any matches.
    #[must_use]
    pub fn selected_department(&self, departments: &[String]) -> Option<String> {
        self.matches(departments)
            .into_iter()
            .nth(self.selected)
            .map(|m| m.name)
    }
}

/// Collapses sorted character indices into contiguous `(start, end)` runs.
fn coalesce(indices: &[usize]) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn departments() -> Vec<String> {
        ["Electrónica", "Física", "Informática", "Matemática", "Química"]
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn picker(query: &str) -> DepartmentPicker {
        let mut picker = DepartmentPicker::new();
        query.chars().for_each(|c| picker.push_char(c));
        picker
    }

    #[test]
    fn empty_query_lists_everything_in_order() {
        let names: Vec<String> = DepartmentPicker::new()
            .matches(&departments())
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, departments());
    }

    #[test]
    fn accent_free_query_matches_accented_department() {
        let matches = picker("fisica").matches(&departments());
        assert_eq!(matches[0].name, "Física");
        assert_eq!(matches[0].highlight_ranges, vec![(0, 6)]);
    }

    #[test]
    fn non_matching_departments_are_dropped() {
        let matches = picker("xyz").matches(&departments());
        assert!(matches.is_empty());
        assert_eq!(picker("xyz").selected_department(&departments()), None);
    }

    #[test]
    fn cursor_wraps_and_resets_on_typing() {
        let mut picker = DepartmentPicker::new();
        picker.move_up(5);
        assert_eq!(picker.selected, 4);
        picker.move_down(5);
        assert_eq!(picker.selected, 0);

        picker.move_down(5);
        picker.push_char('m');
        assert_eq!(picker.selected, 0);
    }

    #[test]
    fn coalesce_merges_consecutive_indices() {
        assert_eq!(coalesce(&[0, 1, 2, 5, 7, 8]), vec![(0, 3), (5, 6), (7, 9)]);
        assert!(coalesce(&[]).is_empty());
    }
}
