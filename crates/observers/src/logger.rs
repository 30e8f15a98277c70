use log::Level;
use rootfind_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// Forwards every solver iteration to the [`log`] facade.
///
/// The observer never changes control flow. Records are written under the
/// `rootfind` target unless another one is set with [`LogObserver::target`].
#[derive(Debug, Clone, Copy)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl LogObserver {
    /// Creates an observer that logs at `level`.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: "rootfind",
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn target(mut self, target: &'static str) -> Self {
        self.target = target;
        self
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(
            target: self.target,
            self.level,
            "iter {}: x = {}, f(x) = {}",
            event.iter(),
            event.x(),
            event.residual()
        );
        None
    }
}
