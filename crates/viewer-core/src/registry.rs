//! Data sets currently shown by the viewer.
//!
//! Replaced wholesale on every data set load. Clone-cheap via Rc.

use std::cell::RefCell;
use std::rc::Rc;
use crate::ports::LoadedDataSet;

#[derive(Clone, Default)]
pub struct DataSetRegistry {
    inner: Rc<RefCell<Vec<Rc<dyn LoadedDataSet>>>>,
}

impl DataSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, data_set: Rc<dyn LoadedDataSet>) {
        self.inner.borrow_mut().push(data_set);
    }

    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }

    pub fn by_index(&self, index: usize) -> Option<Rc<dyn LoadedDataSet>> {
        self.inner.borrow().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    /// Resize every plane of the first data set.
    /// Returns how many planes were resized.
    pub fn resize_first(&self) -> usize {
        let Some(data_set) = self.by_index(0) else {
            return 0;
        };
        let planes = data_set.planes();
        for plane in &planes {
            plane.resize_canvas();
        }
        planes.len()
    }
}
