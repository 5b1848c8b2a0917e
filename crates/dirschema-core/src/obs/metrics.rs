use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, in-memory counters for engine activity on this thread.
///

#[derive(Clone, Debug, Default, Serialize)]
pub(crate) struct EventState {
    pub(crate) ops: EventOps,
    pub(crate) rules: BTreeMap<String, RuleCounters>,
    pub(crate) syntax_rejections: BTreeMap<String, u64>,
    pub(crate) index_keys: BTreeMap<String, u64>,
}

///
/// EventOps
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    pub normalizations: u64,
    pub decode_failures: u64,
    pub syntax_rejections: u64,
    pub keys_emitted: u64,
}

///
/// RuleCounters
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RuleCounters {
    pub normalizations: u64,
    pub decode_failures: u64,
}

///
/// EventReport
/// Point-in-time snapshot of the counters.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct EventReport {
    pub ops: EventOps,
    pub rules: BTreeMap<String, RuleCounters>,
    pub syntax_rejections: BTreeMap<String, u64>,
    pub index_keys: BTreeMap<String, u64>,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

pub(crate) fn report() -> EventReport {
    with_state(|m| EventReport {
        ops: m.ops,
        rules: m.rules.clone(),
        syntax_rejections: m.syntax_rejections.clone(),
        index_keys: m.index_keys.clone(),
    })
}

/// Reset all counters.
pub(crate) fn reset_all() {
    with_state_mut(|m| *m = EventState::default());
}

/// Increment the counter stored under `key`, allocating the key only on
/// first use.
pub(crate) fn bump<V: Default>(
    map: &mut BTreeMap<String, V>,
    key: &str,
    f: impl FnOnce(&mut V),
) {
    if let Some(entry) = map.get_mut(key) {
        f(entry);
    } else {
        f(map.entry(key.to_string()).or_default());
    }
}
