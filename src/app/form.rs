//! Apply form state.
//!
//! The form is opened for one position and only offers the categories the
//! eligibility rule still allows, so a submitted form normally passes the
//! store guards. The store validates again on submit.

use crate::domain::{NewApplication, PositionCategory, Section};
use crate::store::Eligibility;

/// Longest reason accepted by the form, in characters.
pub const MAX_REASON_CHARS: usize = 500;

/// Draft of a new application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyForm {
    pub position_id: String,
    pub position_title: String,
    /// Categories still open to the user, in catalog order.
    pub choices: Vec<PositionCategory>,
    /// Index into `choices`; `None` for positions without categories.
    pub choice: Option<usize>,
    pub section: Section,
    pub reason: String,
}

impl ApplyForm {
    /// Opens a form preselecting the first remaining category.
    #[must_use]
    pub fn open(position_id: &str, position_title: &str, eligibility: &Eligibility) -> Self {
        let choices = eligibility.remaining_categories.clone();
        Self {
            position_id: position_id.to_string(),
            position_title: position_title.to_string(),
            choice: if choices.is_empty() { None } else { Some(0) },
            choices,
            section: Section::default(),
            reason: String::new(),
        }
    }

    #[must_use]
    pub fn category(&self) -> Option<PositionCategory> {
        self.choice.and_then(|idx| self.choices.get(idx).copied())
    }

    /// Selects the next remaining category, wrapping around.
    pub fn cycle_category(&mut self) {
        if let Some(idx) = self.choice {
            self.choice = Some((idx + 1) % self.choices.len());
        }
    }

    pub fn toggle_section(&mut self) {
        self.section = self.section.toggled();
    }

    /// Appends to the reason. Control characters and overflow are dropped.
    pub fn push_char(&mut self, c: char) {
        if !c.is_control() && self.reason.chars().count() < MAX_REASON_CHARS {
            self.reason.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        self.reason.pop();
    }

    /// Builds the store request from the draft.
    #[must_use]
    pub fn to_request(&self) -> NewApplication {
        NewApplication::new(self.position_id.clone(), self.category())
            .with_section(self.section)
            .with_reason(self.reason.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PositionStatus;

    fn eligibility(remaining: Vec<PositionCategory>) -> Eligibility {
        Eligibility {
            status: PositionStatus::Open,
            fully_applied: false,
            remaining_categories: remaining,
        }
    }

    #[test]
    fn category_cycles_through_remaining_choices() {
        let mut form = ApplyForm::open(
            "inf-225",
            "Arquitectura de Computadores",
            &eligibility(vec![PositionCategory::Correccion, PositionCategory::Laboratorio]),
        );
        assert_eq!(form.category(), Some(PositionCategory::Correccion));
        form.cycle_category();
        assert_eq!(form.category(), Some(PositionCategory::Laboratorio));
        form.cycle_category();
        assert_eq!(form.category(), Some(PositionCategory::Correccion));
    }

    #[test]
    fn categoryless_form_has_no_choice() {
        let mut form = ApplyForm::open("inf-253", "Lenguajes de Programación", &eligibility(vec![]));
        form.cycle_category();
        assert_eq!(form.category(), None);
    }

    #[test]
    fn request_carries_section_and_trimmed_reason() {
        let mut form = ApplyForm::open("inf-253", "Lenguajes de Programación", &eligibility(vec![]));
        form.toggle_section();
        "  me gusta ".chars().for_each(|c| form.push_char(c));
        form.push_char('\n');

        let request = form.to_request();
        assert_eq!(request.section, Section::S201);
        assert_eq!(request.reason, "me gusta");
        assert_eq!(request.category, None);
    }
}
