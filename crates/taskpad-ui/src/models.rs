//! Transient notices shown by the toast host.

use std::rc::Rc;

use yew::Reducible;

/// How a notice is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Neutral notice, such as a logout.
    Info,
    /// Completed action, such as a signup.
    Success,
}

impl ToastKind {
    /// Class appended to `toast`.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
        }
    }
}

/// One notice on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Increasing id, used to dismiss it.
    pub id: u64,
    /// Text shown.
    pub message: String,
    /// Styling.
    pub kind: ToastKind,
}

/// Notices kept at once.
pub const MAX_TOASTS: usize = 4;

/// Append a toast, dropping the oldest ones beyond [`MAX_TOASTS`].
pub fn push_toast(toasts: &mut Vec<Toast>, next_id: u64, kind: ToastKind, message: String) {
    toasts.push(Toast {
        id: next_id,
        message,
        kind,
    });
    if toasts.len() > MAX_TOASTS {
        let drain = toasts.len() - MAX_TOASTS;
        toasts.drain(0..drain);
    }
}

/// Remove a toast by id.
pub fn dismiss_toast(toasts: &mut Vec<Toast>, id: u64) {
    toasts.retain(|toast| toast.id != id);
}

/// Change to the notice stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastCommand {
    /// Show a new notice.
    Push(ToastKind, String),
    /// Remove the notice with this id.
    Dismiss(u64),
}

/// Notices on screen plus the id the next one gets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastStack {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastStack {
    /// Notices, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Apply `command` in place.
    pub fn apply(&mut self, command: ToastCommand) {
        match command {
            ToastCommand::Push(kind, message) => {
                self.next_id += 1;
                push_toast(&mut self.toasts, self.next_id, kind, message);
            }
            ToastCommand::Dismiss(id) => dismiss_toast(&mut self.toasts, id),
        }
    }
}

// Each action sees the stack left by the previous one.
impl Reducible for ToastStack {
    type Action = ToastCommand;

    fn reduce(self: Rc<Self>, action: ToastCommand) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_are_capped_oldest_first() {
        let mut toasts = Vec::new();
        for id in 1..=6 {
            push_toast(&mut toasts, id, ToastKind::Info, format!("toast {id}"));
        }
        let ids: Vec<u64> = toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);

        dismiss_toast(&mut toasts, 4);
        let ids: Vec<u64> = toasts.iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![3, 5, 6]);
    }

    #[test]
    fn back_to_back_pushes_keep_both_notices() {
        let stack = Rc::new(ToastStack::default());
        let stack = stack.reduce(ToastCommand::Push(ToastKind::Success, "Signed up".into()));
        let stack = stack.reduce(ToastCommand::Push(ToastKind::Info, "Logged out".into()));
        let ids: Vec<u64> = stack.toasts().iter().map(|toast| toast.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(stack.toasts()[0].message, "Signed up");

        let stack = stack.reduce(ToastCommand::Dismiss(1));
        assert_eq!(stack.toasts().len(), 1);
        assert_eq!(stack.toasts()[0].message, "Logged out");
    }
}
