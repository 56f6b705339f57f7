//! Single-slot holder for a cancellable deferred callback.

/// A handle to a scheduled callback that can be revoked before it fires.
pub trait Cancel {
    fn cancel(self);
}

/// Holds at most one pending task.
///
/// Scheduling a new task cancels whatever was pending, so two tasks owned
/// by the same slot can never be outstanding at once.
#[derive(Debug)]
pub struct PendingTask<H: Cancel> {
    handle: Option<H>,
}

impl<H: Cancel> PendingTask<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Store `handle`, cancelling the previously pending one.
    pub fn replace(&mut self, handle: H) {
        if let Some(previous) = self.handle.replace(handle) {
            previous.cancel();
        }
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.cancel();
        }
    }

    /// Forget the pending task without cancelling it (it already fired).
    pub fn release(&mut self) -> Option<H> {
        self.handle.take()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: Cancel> Default for PendingTask<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        id: u32,
        log: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for Recorder {
        fn cancel(self) {
            self.log.borrow_mut().push(self.id);
        }
    }

    fn recorder(id: u32, log: &Rc<RefCell<Vec<u32>>>) -> Recorder {
        Recorder {
            id,
            log: Rc::clone(log),
        }
    }

    #[test]
    fn test_replace_cancels_previous() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = PendingTask::new();
        slot.replace(recorder(1, &log));
        slot.replace(recorder(2, &log));
        assert_eq!(*log.borrow(), vec![1]);
        assert!(slot.is_pending());
    }

    #[test]
    fn test_cancel_empties_slot() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = PendingTask::new();
        slot.replace(recorder(7, &log));
        slot.cancel();
        slot.cancel();
        assert_eq!(*log.borrow(), vec![7]);
        assert!(!slot.is_pending());
    }

    #[test]
    fn test_release_does_not_cancel() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut slot = PendingTask::new();
        slot.replace(recorder(3, &log));
        assert!(slot.release().is_some());
        assert!(log.borrow().is_empty());
        assert!(!slot.is_pending());
    }
}
