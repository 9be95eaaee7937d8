//! Bootstrap progress, queued for the embedding page.
//!
//! The bootstrapper emits as each step completes; the page pulls whatever
//! has accumulated through the handle returned by `embed`, so progress is
//! visible while the run is still pending.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use viewer_types::event::BootstrapEvent;

#[derive(Clone, Default)]
pub struct EventBus {
    queue: Rc<RefCell<VecDeque<BootstrapEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: BootstrapEvent) {
        log::debug!("bootstrap: {:?}", event);
        self.queue.borrow_mut().push_back(event);
    }

    /// Take everything emitted since the last drain, oldest first
    pub fn drain(&self) -> Vec<BootstrapEvent> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.borrow().is_empty()
    }
}
