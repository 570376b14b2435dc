// src/options.rs

//! Diagnostic verbosity control.
//!
//! Verbosity gates the `[+]`/`[-]`/`[*]` lines an operation emits through the
//! [`log`] facade. It never changes what the operation returns.

/// How talkative an operation is on the [`log`] facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress every diagnostic line.
    Silent,
    /// Standard diagnostics: progress info and warnings.
    #[default]
    Default,
    /// Accepted for callers that want to ask for more; currently emits the same
    /// lines as [`Verbosity::Default`].
    Verbose,
}

impl Verbosity {
    /// Whether diagnostic lines should be emitted at all.
    #[inline(always)]
    pub const fn emits_diagnostics(self) -> bool {
        !matches!(self, Self::Silent)
    }
}
