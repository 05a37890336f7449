//! Where the bridge reports conditions it absorbs instead of failing.
use std::cell::Ref;
use std::cell::RefCell;
use std::rc::Rc;

pub const DIAGNOSTICS_TARGET: &str = "host_bridge";

pub trait DiagnosticSink {
    fn warn(&self, message: &str);
}

/// Sends diagnostics to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!(target: DIAGNOSTICS_TARGET, "{}", message);
    }
}

/// Keeps diagnostics in memory. Clones share the same list.
#[derive(Clone, Debug, Default)]
pub struct RecordingDiagnostics(Rc<RefCell<Vec<String>>>);

impl RecordingDiagnostics {
    pub fn messages(&self) -> Ref<'_, Vec<String>> {
        self.0.borrow()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl DiagnosticSink for RecordingDiagnostics {
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}
