//! Metrics sink boundary.
//!
//! Engine logic MUST NOT depend on obs::metrics directly.
//! All instrumentation flows through MetricsEvent and MetricsSink.
use crate::obs::metrics::{self, EventReport};
use std::{cell::RefCell, rc::Rc};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<Rc<dyn MetricsSink>>> = const { RefCell::new(None) };
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MetricsEvent<'a> {
    Normalized { rule_oid: &'a str },
    DecodeFailed { rule_oid: &'a str },
    SyntaxRejected { syntax_oid: &'a str },
    KeysEmitted { index_id: &'a str, count: u64 },
}

///
/// MetricsSink
///

pub trait MetricsSink {
    fn record(&self, event: MetricsEvent<'_>);
}

/// GlobalMetricsSink
/// Default sink that writes into the thread-local counters.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct GlobalMetricsSink;

impl MetricsSink for GlobalMetricsSink {
    fn record(&self, event: MetricsEvent<'_>) {
        match event {
            MetricsEvent::Normalized { rule_oid } => metrics::with_state_mut(|m| {
                m.ops.normalizations = m.ops.normalizations.saturating_add(1);
                metrics::bump(&mut m.rules, rule_oid, |entry| {
                    entry.normalizations = entry.normalizations.saturating_add(1);
                });
            }),

            MetricsEvent::DecodeFailed { rule_oid } => metrics::with_state_mut(|m| {
                m.ops.decode_failures = m.ops.decode_failures.saturating_add(1);
                metrics::bump(&mut m.rules, rule_oid, |entry| {
                    entry.decode_failures = entry.decode_failures.saturating_add(1);
                });
            }),

            MetricsEvent::SyntaxRejected { syntax_oid } => metrics::with_state_mut(|m| {
                m.ops.syntax_rejections = m.ops.syntax_rejections.saturating_add(1);
                metrics::bump(&mut m.syntax_rejections, syntax_oid, |count| {
                    *count = count.saturating_add(1);
                });
            }),

            MetricsEvent::KeysEmitted { index_id, count } => metrics::with_state_mut(|m| {
                m.ops.keys_emitted = m.ops.keys_emitted.saturating_add(count);
                metrics::bump(&mut m.index_keys, index_id, |total| {
                    *total = total.saturating_add(count);
                });
            }),
        }
    }
}

pub(crate) const GLOBAL_METRICS_SINK: GlobalMetricsSink = GlobalMetricsSink;

pub(crate) fn record(event: MetricsEvent<'_>) {
    let sink = SINK_OVERRIDE.with(|cell| cell.borrow().clone());

    match sink {
        Some(sink) => sink.record(event),
        None => GLOBAL_METRICS_SINK.record(event),
    }
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn metrics_report() -> EventReport {
    metrics::report()
}

/// Reset the current thread's counters.
pub fn metrics_reset_all() {
    metrics::reset_all();
}

/// Run a closure with a temporary metrics sink override on this thread.
pub fn with_metrics_sink<T>(sink: Rc<dyn MetricsSink>, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<Rc<dyn MetricsSink>>);

    impl Drop for Guard {
        fn drop(&mut self) {
            let previous = self.0.take();
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = previous;
            });
        }
    }

    let previous = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink));
    let _guard = Guard(previous);

    f()
}
