//! Module: diagnostics
//! Responsibility: collect human-readable reasons for syntax rejections.
//! Does not own: rejection decisions (validators own those).
//! Boundary: validators push messages; callers decide how to surface them.

///
/// Diagnostics
///
/// Sink for syntax-violation messages. A validator that writes here has
/// rejected the value.
///

pub trait Diagnostics {
    fn push(&mut self, message: String);
}

impl dyn Diagnostics + '_ {
    /// Record one violation message.
    pub fn issue(&mut self, message: impl Into<String>) {
        self.push(message.into());
    }
}

impl Diagnostics for Vec<String> {
    fn push(&mut self, message: String) {
        Vec::push(self, message);
    }
}

///
/// DiscardDiagnostics
///
/// Sink that drops every message; used when only the verdict matters.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct DiscardDiagnostics;

impl Diagnostics for DiscardDiagnostics {
    fn push(&mut self, _: String) {}
}

///
/// CountingDiagnostics
///

#[derive(Clone, Debug, Default)]
pub struct CountingDiagnostics {
    pub count: usize,
    pub last: Option<String>,
}

impl Diagnostics for CountingDiagnostics {
    fn push(&mut self, message: String) {
        self.count += 1;
        self.last = Some(message);
    }
}
