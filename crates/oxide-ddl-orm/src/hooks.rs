//! Lifecycle hooks.

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::instance::ModelInstance;

/// Points in the lifecycle where hooks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// Before `deletedAt` is cleared.
    BeforeRestore,
    /// After the restoring UPDATE ran.
    AfterRestore,
    /// Before a soft or hard delete.
    BeforeDestroy,
    /// After the delete ran.
    AfterDestroy,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BeforeRestore => "beforeRestore",
            Self::AfterRestore => "afterRestore",
            Self::BeforeDestroy => "beforeDestroy",
            Self::AfterDestroy => "afterDestroy",
        };
        f.write_str(name)
    }
}

/// A hook callback. Returning an error aborts the operation.
pub type Hook = Box<dyn Fn(&mut ModelInstance) -> Result<()> + Send + Sync>;

/// Registered hooks, run in registration order.
#[derive(Default)]
pub struct Hooks {
    entries: Vec<(HookKind, Hook)>,
}

impl Hooks {
    /// Registers `hook` for `kind`.
    pub fn add(&mut self, kind: HookKind, hook: Hook) {
        self.entries.push((kind, hook));
    }

    /// Number of hooks registered for `kind`.
    #[must_use]
    pub fn count(&self, kind: HookKind) -> usize {
        self.entries.iter().filter(|(k, _)| *k == kind).count()
    }

    pub(crate) fn run(&self, kind: HookKind, instance: &mut ModelInstance) -> Result<()> {
        for (_, hook) in self.entries.iter().filter(|(k, _)| *k == kind) {
            debug!(hook = %kind, model = instance.model().name(), "Running hook");
            hook(instance)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(kind, _)| kind))
            .finish()
    }
}
