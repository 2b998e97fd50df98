use crate::menu::builder::TriggerOutcome;
use crate::menu::session::{BuildReport, MenuSession};
use crate::provider::provider::AccessibilityProvider;
use crate::trace::logger::TraceLogger;

pub mod cli;
pub mod menu;
pub mod provider;
pub mod trace;

/// Mirror `pid`'s menu bar into a fresh session.
pub fn mirror(
    provider: &dyn AccessibilityProvider,
    pid: i32,
    tracer: &TraceLogger,
) -> (MenuSession, BuildReport) {
    let mut session = MenuSession::new();
    let report = session.build(provider, pid, tracer);
    (session, report)
}

/// Trigger the leaf identified by `target_path` without keeping any session
/// state around. Used for scripted and hotkey invocation.
pub fn trigger_path(
    provider: &dyn AccessibilityProvider,
    pid: i32,
    target_path: &str,
    tracer: &TraceLogger,
) -> TriggerOutcome {
    let mut session = MenuSession::new();
    session.trigger(provider, pid, target_path, tracer)
}
