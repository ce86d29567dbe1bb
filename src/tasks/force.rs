//! Scoped "continue past errors" override.
//!
//! One of the integration bundles has circular module dependencies that
//! cannot be fixed on our side, so bundling runs with force enabled. The flag
//! lives in the build context and is handed to the bundler explicitly.

/// Force state for one build run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForceFlag {
    value: bool,
    user_requested: bool,
    set_by_toggle: bool,
}

impl ForceFlag {
    /// Starts out set when the user passed `--force`.
    pub fn new(user_requested: bool) -> Self {
        Self {
            value: user_requested,
            user_requested,
            set_by_toggle: false,
        }
    }

    /// Turns force on, remembering that we did so.
    ///
    /// Leaves the flag alone when it is already set.
    pub fn force_on(&mut self) {
        if !self.value {
            self.value = true;
            self.set_by_toggle = true;
        }
    }

    /// Turns force off again, only if [`force_on`](Self::force_on) set it.
    pub fn force_off(&mut self) {
        if self.set_by_toggle {
            self.value = false;
            self.set_by_toggle = false;
        }
    }

    pub fn is_set(&self) -> bool {
        self.value
    }

    pub fn user_requested(&self) -> bool {
        self.user_requested
    }
}
