// ============================================================================
// MOUNT TRACKING - Drops async completions for views that are gone
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Debug, Default)]
pub struct MountTracker {
    generation: Rc<Cell<u64>>,
}

impl MountTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new mount; every earlier token goes stale
    pub fn mount(&self) -> MountToken {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        MountToken {
            generation: next,
            tracker: self.generation.clone(),
        }
    }

    /// Unmount whatever is currently mounted
    pub fn invalidate(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}

#[derive(Clone, Debug)]
pub struct MountToken {
    generation: u64,
    tracker: Rc<Cell<u64>>,
}

impl MountToken {
    pub fn is_current(&self) -> bool {
        self.tracker.get() == self.generation
    }
}
