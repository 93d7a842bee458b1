//! Confirm - Yes/no gate in front of destructive actions

/// What the user is being asked to approve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletePrompt {
    /// One row, identified by its name for the dialog text
    Row { index: usize, name: String },
    /// Every selected row
    Selected { count: usize },
}

/// Capability the table asks before deleting anything
pub trait Confirm {
    fn confirm(&mut self, prompt: &DeletePrompt) -> bool;
}

/// An answer the user already gave, e.g. through a modal dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered(pub bool);

impl Confirm for Answered {
    fn confirm(&mut self, _prompt: &DeletePrompt) -> bool {
        self.0
    }
}

impl<F> Confirm for F
where
    F: FnMut(&DeletePrompt) -> bool,
{
    fn confirm(&mut self, prompt: &DeletePrompt) -> bool {
        self(prompt)
    }
}
