//! Add-task form logic.
//!
//! # Design
//! - Validate on the trimmed title but submit exactly what was typed.
//! - Clear the input as soon as a title is accepted, before the request resolves.

use crate::core::form::FormError;

/// Editable state of the add-task form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddTaskForm {
    /// Current input value.
    pub input: String,
}

impl AddTaskForm {
    /// Replace the input value.
    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Accept the current input.
    ///
    /// On success the untrimmed title is returned and the input is cleared;
    /// on failure the input is left as is.
    ///
    /// # Errors
    /// Returns [`FormError::EmptyTitle`] for empty or whitespace-only input.
    pub fn submit(&mut self) -> Result<String, FormError> {
        validate_title(&self.input)?;
        Ok(std::mem::take(&mut self.input))
    }
}

/// Check that `title` has visible content.
///
/// # Errors
/// Returns [`FormError::EmptyTitle`] when `title.trim()` is empty.
pub fn validate_title(title: &str) -> Result<(), FormError> {
    if title.trim().is_empty() {
        return Err(FormError::EmptyTitle);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_emits_untrimmed_title_and_clears() {
        let mut form = AddTaskForm::default();
        form.set_input("  buy milk  ");
        assert_eq!(form.submit(), Ok("  buy milk  ".to_string()));
        assert!(form.input.is_empty());
    }

    #[test]
    fn blank_titles_are_rejected_and_kept() {
        for value in ["", "   ", "\t\n"] {
            let mut form = AddTaskForm::default();
            form.set_input(value);
            assert_eq!(form.submit(), Err(FormError::EmptyTitle));
            assert_eq!(form.input, value);
        }
    }
}
