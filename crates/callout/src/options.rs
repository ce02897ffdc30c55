//! Construction options for the logging facade.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Options recognized by [`Log::new`](crate::Log::new).
///
/// `verbose` picks which of the two gated facades a root write counts as;
/// `debug` enables the `debug` method's output; `muted` is the initial muted
/// state shared by the whole facade triangle. `error_count` lets the caller
/// supply the failure counter that `error`/`errorlns` increment; when absent
/// the facade owns its own.
///
/// Options can also be loaded from YAML, alongside whatever other
/// configuration an application keeps there (the counter is process state,
/// not configuration, and is skipped):
///
/// ```rust
/// use callout::LogOptions;
///
/// let options = LogOptions::from_yaml("verbose: true\ndebug: true").unwrap();
/// assert!(options.verbose);
/// assert!(options.debug);
/// assert!(!options.muted);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Enables `debug` output.
    pub debug: bool,
    /// The root facade's own mode flag.
    pub verbose: bool,
    /// Initial muted state.
    pub muted: bool,
    /// Caller-supplied failure counter, incremented by the `error*` methods.
    #[serde(skip)]
    pub error_count: Option<Rc<Cell<usize>>>,
}

impl LogOptions {
    /// Creates options with all defaults (not verbose, not debug, unmuted).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the debug flag.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Sets the verbose flag.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the initial muted state.
    pub fn muted(mut self, muted: bool) -> Self {
        self.muted = muted;
        self
    }

    /// Supplies the failure counter the `error*` methods increment.
    pub fn error_count(mut self, counter: Rc<Cell<usize>>) -> Self {
        self.error_count = Some(counter);
        self
    }

    /// Loads options from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}
