//! In-memory storage backend. Backs the test suites and any host that
//! wants a throwaway league without real persistence.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use crate::LeagueStorage;
use crate::models::LeagueState;

/// Shared-handle snapshot storage; clones observe the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    snapshot: Rc<RefCell<Option<LeagueState>>>,
}

impl LeagueStorage for MemoryStorage {
    type Error = Infallible;

    fn load(&self) -> Result<Option<LeagueState>, Self::Error> {
        Ok(self.snapshot.borrow().clone())
    }

    fn save(&self, state: &LeagueState) -> Result<(), Self::Error> {
        *self.snapshot.borrow_mut() = Some(state.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        *self.snapshot.borrow_mut() = None;
        Ok(())
    }
}
