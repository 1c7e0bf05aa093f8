//! Modal State Machine
//!
//! Pure `(state, event) -> effects` logic for the project dialog. The
//! component owns the DOM and carries out the returned effects; this
//! module decides what they are.

use leptos_focus_trap::{trap_key, TrapAction};

/// Ways a user can dismiss the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    CloseControl,
    Backdrop,
    Escape,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalEvent<T, I> {
    Open { item: T, invoker: Option<I> },
    Dismiss(Dismissal),
    Key {
        key: String,
        shift: bool,
        /// Index of the focused element among the focusables
        active: Option<usize>,
        focusable: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalEffect<T, I> {
    /// Replace every displayed field with this item
    Populate(T),
    Show,
    FocusInitial,
    StartTrap,
    StopTrap,
    /// Start the close transition; hide once it finishes if this close
    /// is still the latest one
    BeginHide(u64),
    PreventDefault,
    FocusAt(usize),
    RestoreFocus(I),
}

/// Open/closed state plus the element focus returns to
#[derive(Debug)]
pub struct ModalMachine<I> {
    open: bool,
    invoker: Option<I>,
    /// Number of closes so far; tags each hide timer
    closes: u64,
}

impl<I> Default for ModalMachine<I> {
    fn default() -> Self {
        Self {
            open: false,
            invoker: None,
            closes: 0,
        }
    }
}

impl<I> ModalMachine<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the hide timer of close `ticket` may hide the dialog.
    /// False once the dialog reopened or closed again.
    pub fn should_hide(&self, ticket: u64) -> bool {
        !self.is_open() && ticket == self.closes
    }

    pub fn step<T>(&mut self, event: ModalEvent<T, I>) -> Vec<ModalEffect<T, I>> {
        match event {
            ModalEvent::Open { item, invoker } => {
                if self.open {
                    // Already trapped; keep the original invoker
                    return vec![ModalEffect::Populate(item), ModalEffect::FocusInitial];
                }
                self.open = true;
                self.invoker = invoker;
                vec![
                    ModalEffect::Populate(item),
                    ModalEffect::Show,
                    ModalEffect::FocusInitial,
                    ModalEffect::StartTrap,
                ]
            }
            ModalEvent::Dismiss(_) => self.close(),
            ModalEvent::Key {
                key,
                shift,
                active,
                focusable,
            } => {
                if !self.open {
                    return Vec::new();
                }
                match trap_key(&key, shift, active, focusable) {
                    TrapAction::Escape => {
                        let mut effects = vec![ModalEffect::PreventDefault];
                        effects.extend(self.close());
                        effects
                    }
                    TrapAction::FocusIndex(i) => {
                        vec![ModalEffect::PreventDefault, ModalEffect::FocusAt(i)]
                    }
                    TrapAction::PassThrough => Vec::new(),
                }
            }
        }
    }

    fn close<T>(&mut self) -> Vec<ModalEffect<T, I>> {
        if !self.open {
            return Vec::new();
        }
        self.open = false;
        self.closes += 1;
        let mut effects = vec![ModalEffect::BeginHide(self.closes), ModalEffect::StopTrap];
        if let Some(invoker) = self.invoker.take() {
            effects.push(ModalEffect::RestoreFocus(invoker));
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Effects = Vec<ModalEffect<&'static str, u32>>;

    fn open(machine: &mut ModalMachine<u32>, item: &'static str, invoker: Option<u32>) -> Effects {
        machine.step(ModalEvent::Open { item, invoker })
    }

    fn key(machine: &mut ModalMachine<u32>, key: &str, shift: bool, active: Option<usize>) -> Effects {
        machine.step(ModalEvent::Key {
            key: key.to_string(),
            shift,
            active,
            focusable: 3,
        })
    }

    #[test]
    fn test_open_populates_shows_and_traps() {
        let mut m = ModalMachine::new();
        let effects = open(&mut m, "x", Some(7));
        assert!(m.is_open());
        assert_eq!(
            effects,
            vec![
                ModalEffect::Populate("x"),
                ModalEffect::Show,
                ModalEffect::FocusInitial,
                ModalEffect::StartTrap,
            ]
        );
    }

    #[test]
    fn test_close_restores_invoker_once() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", Some(7));
        let effects: Effects = m.step(ModalEvent::Dismiss(Dismissal::CloseControl));
        assert_eq!(
            effects,
            vec![ModalEffect::BeginHide(1), ModalEffect::StopTrap, ModalEffect::RestoreFocus(7)]
        );
        assert!(!m.is_open());

        // Second close is a no-op
        let again: Effects = m.step(ModalEvent::Dismiss(Dismissal::Backdrop));
        assert!(again.is_empty());
    }

    #[test]
    fn test_close_without_invoker_skips_restore() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", None);
        let effects: Effects = m.step(ModalEvent::Dismiss(Dismissal::Backdrop));
        assert_eq!(effects, vec![ModalEffect::BeginHide(1), ModalEffect::StopTrap]);
    }

    #[test]
    fn test_close_when_never_opened() {
        let mut m = ModalMachine::<u32>::new();
        let effects: Effects = m.step(ModalEvent::Dismiss(Dismissal::CloseControl));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_escape_closes_and_prevents_default() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", Some(1));
        let effects = key(&mut m, "Escape", false, Some(1));
        assert_eq!(
            effects,
            vec![
                ModalEffect::PreventDefault,
                ModalEffect::BeginHide(1),
                ModalEffect::StopTrap,
                ModalEffect::RestoreFocus(1),
            ]
        );
        assert!(key(&mut m, "Escape", false, None).is_empty());
    }

    #[test]
    fn test_tab_wraps_inside_open_modal() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", Some(1));
        assert_eq!(
            key(&mut m, "Tab", false, Some(2)),
            vec![ModalEffect::PreventDefault, ModalEffect::FocusAt(0)]
        );
        assert_eq!(
            key(&mut m, "Tab", true, Some(0)),
            vec![ModalEffect::PreventDefault, ModalEffect::FocusAt(2)]
        );
        assert!(key(&mut m, "Tab", false, Some(0)).is_empty());
        assert!(key(&mut m, "ArrowDown", false, Some(0)).is_empty());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut m = ModalMachine::<u32>::new();
        assert!(key(&mut m, "Tab", false, Some(2)).is_empty());
    }

    #[test]
    fn test_reopen_replaces_content_and_rearms() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", Some(1));
        let _: Effects = m.step(ModalEvent::Dismiss(Dismissal::Escape));

        let effects = open(&mut m, "y", Some(2));
        assert_eq!(effects[0], ModalEffect::Populate("y"));
        assert!(effects.contains(&ModalEffect::StartTrap));

        let closed: Effects = m.step(ModalEvent::Dismiss(Dismissal::Backdrop));
        assert_eq!(closed.last(), Some(&ModalEffect::RestoreFocus(2)));
    }

    #[test]
    fn test_open_while_open_keeps_single_trap_and_first_invoker() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", Some(1));
        let effects = open(&mut m, "y", Some(2));
        assert_eq!(effects, vec![ModalEffect::Populate("y"), ModalEffect::FocusInitial]);

        let closed: Effects = m.step(ModalEvent::Dismiss(Dismissal::CloseControl));
        assert_eq!(closed.last(), Some(&ModalEffect::RestoreFocus(1)));
    }

    #[test]
    fn test_only_latest_close_hides() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", Some(1));
        let _: Effects = m.step(ModalEvent::Dismiss(Dismissal::CloseControl));
        assert!(m.should_hide(1));

        // Reopen then close again before the first timer fires
        open(&mut m, "y", Some(2));
        assert!(!m.should_hide(1));
        let closed: Effects = m.step(ModalEvent::Dismiss(Dismissal::Escape));
        assert_eq!(closed[0], ModalEffect::BeginHide(2));
        assert!(!m.should_hide(1));
        assert!(m.should_hide(2));
    }

    #[test]
    fn test_no_hide_while_reopened() {
        let mut m = ModalMachine::new();
        open(&mut m, "x", None);
        let _: Effects = m.step(ModalEvent::Dismiss(Dismissal::Backdrop));
        open(&mut m, "x", None);
        assert!(!m.should_hide(1));
    }
}
