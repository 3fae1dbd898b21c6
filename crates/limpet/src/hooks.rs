//! Per-test setup and teardown hooks
//!
//! One optional setup procedure and one optional teardown procedure. Each
//! slot holds at most one hook; installing a new one replaces the previous
//! reference rather than stacking it.

/// The setup/teardown hook slots wrapped around every executed test.
///
/// Hooks are zero-argument procedures owned by the caller; they borrow
/// caller state through `'a`. Teardown always runs for an executed test,
/// even when the body failed assertions, so caller-managed resources do not
/// leak across tests.
#[derive(Default)]
pub struct Hooks<'a> {
    setup: Option<Box<dyn FnMut() + 'a>>,
    teardown: Option<Box<dyn FnMut() + 'a>>,
}

impl<'a> Hooks<'a> {
    /// Create empty hook slots
    pub fn new() -> Self {
        Self {
            setup: None,
            teardown: None,
        }
    }

    /// Install a setup hook, replacing any previous one
    pub fn set_setup(&mut self, hook: impl FnMut() + 'a) {
        self.setup = Some(Box::new(hook));
    }

    /// Remove the setup hook; a no-op when the slot is already empty
    pub fn clear_setup(&mut self) {
        self.setup = None;
    }

    /// Install a teardown hook, replacing any previous one
    pub fn set_teardown(&mut self, hook: impl FnMut() + 'a) {
        self.teardown = Some(Box::new(hook));
    }

    /// Remove the teardown hook; a no-op when the slot is already empty
    pub fn clear_teardown(&mut self) {
        self.teardown = None;
    }

    /// Invoke the setup hook if one is installed
    pub fn run_setup(&mut self) {
        if let Some(hook) = self.setup.as_mut() {
            hook();
        }
    }

    /// Invoke the teardown hook if one is installed
    pub fn run_teardown(&mut self) {
        if let Some(hook) = self.teardown.as_mut() {
            hook();
        }
    }
}

impl std::fmt::Debug for Hooks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("setup", &self.setup.is_some())
            .field("teardown", &self.teardown.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_empty_slots_run_as_noops() {
        let mut hooks = Hooks::new();
        hooks.run_setup();
        hooks.run_teardown();
    }

    #[test]
    fn test_clearing_empty_slots_does_not_panic() {
        let mut hooks = Hooks::new();
        hooks.clear_setup();
        hooks.clear_teardown();
    }

    #[test]
    fn test_installed_hooks_run_when_invoked() {
        let setup_runs = Cell::new(0);
        let teardown_runs = Cell::new(0);

        let mut hooks = Hooks::new();
        hooks.set_setup(|| setup_runs.set(setup_runs.get() + 1));
        hooks.set_teardown(|| teardown_runs.set(teardown_runs.get() + 1));

        hooks.run_setup();
        hooks.run_setup();
        hooks.run_teardown();

        assert_eq!(setup_runs.get(), 2);
        assert_eq!(teardown_runs.get(), 1);
    }

    #[test]
    fn test_installing_replaces_previous_hook() {
        let first = Cell::new(0);
        let second = Cell::new(0);

        let mut hooks = Hooks::new();
        hooks.set_setup(|| first.set(first.get() + 1));
        hooks.set_setup(|| second.set(second.get() + 1));
        hooks.run_setup();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_cleared_hook_no_longer_runs() {
        let runs = Cell::new(0);

        let mut hooks = Hooks::new();
        hooks.set_teardown(|| runs.set(runs.get() + 1));
        hooks.clear_teardown();
        hooks.run_teardown();

        assert_eq!(runs.get(), 0);
    }
}
