use rootfind_core::Observer;

use crate::traits::{HasIterate, HasResidual};

/// One recorded solver iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record {
    pub iter: usize,
    pub x: f64,
    pub residual: f64,
}

/// Records every iteration a solver reports.
///
/// Pass `&mut history` as the observer so the records stay available after
/// the solve returns.
#[derive(Debug, Clone, Default)]
pub struct History {
    records: Vec<Record>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded iterations in order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Returns the evaluated points in order.
    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.x)
    }

    /// Returns the most recent record, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Returns the number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<E, A> Observer<E, A> for &mut History
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.records.push(Record {
            iter: event.iter(),
            x: event.x(),
            residual: event.residual(),
        });
        None
    }
}
