use std::collections::VecDeque;
use std::rc::Rc;
use yew::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 4000;
/// Older toasts are dropped once this many are visible.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
}

/// Error notifications currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastStack {
    pub toasts: VecDeque<Toast>,
}

pub enum ToastAction {
    /// Show a toast; the caller picks the id so it can schedule the dismissal
    Push(Toast),
    /// Remove one toast by id; no-op if it already left the stack
    Dismiss(u64),
}

impl ToastStack {
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push_back(toast);
        while self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.pop_front();
        }
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

impl Reducible for ToastStack {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut stack = (*self).clone();
        match action {
            ToastAction::Push(toast) => stack.push(toast),
            ToastAction::Dismiss(id) => stack.dismiss(id),
        }
        Rc::new(stack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, text: &str) -> Toast {
        Toast { id, text: text.to_string() }
    }

    #[test]
    fn test_push_and_dismiss() {
        let mut stack = ToastStack::default();
        stack.push(toast(1, "No file selected"));
        stack.push(toast(2, "Please select a valid image file"));

        stack.dismiss(1);
        assert_eq!(stack.toasts.len(), 1);
        assert_eq!(stack.toasts[0].id, 2);

        // Already gone
        stack.dismiss(1);
        assert_eq!(stack.toasts.len(), 1);
    }

    #[test]
    fn test_caps_visible_toasts() {
        let mut stack = ToastStack::default();
        for i in 0..5 {
            stack.push(toast(i, &format!("error {}", i)));
        }
        assert_eq!(stack.toasts.len(), MAX_VISIBLE_TOASTS);
        assert_eq!(stack.toasts[0].text, "error 2");
    }

    #[test]
    fn test_reduce() {
        let stack = Rc::new(ToastStack::default())
            .reduce(ToastAction::Push(toast(7, "Image is still too large after compression!")));
        assert_eq!(stack.toasts.len(), 1);
        let stack = stack.reduce(ToastAction::Dismiss(7));
        assert!(stack.toasts.is_empty());
    }
}
