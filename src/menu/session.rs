use crate::menu::builder::{BuildPhase, MenuBuilder, TriggerOutcome};
use crate::menu::flat_index::{FlatIndex, menu_fingerprint};
use crate::menu::menu_model::{MenuNode, MenuTree};
use crate::menu::search::{SearchState, apply_filter};
use crate::provider::provider::AccessibilityProvider;
use crate::trace::{logger::TraceLogger, trace::TraceEvent};

/// Summary of one build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub phase: BuildPhase,
    pub top_level_count: usize,
    pub indexed: usize,
    pub fingerprint: String,
}

/// Caller-owned session state: the canonical tree, the flat leaf index and
/// the live search state.
///
/// The tree and index are rebuilt in place on every `build` or `trigger`
/// call; the search state resets with them. Build and filter calls must be
/// serialized by the caller: single writer, no concurrent readers during a
/// rebuild.
#[derive(Debug, Default)]
pub struct MenuSession {
    pub tree: MenuTree,
    pub index: FlatIndex,
    pub search: SearchState,
}

impl MenuSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the application's menu bar into the session.
    pub fn build(
        &mut self,
        provider: &dyn AccessibilityProvider,
        pid: i32,
        tracer: &TraceLogger,
    ) -> BuildReport {
        let result = MenuBuilder::new(provider).build(pid);
        self.tree = result.tree;
        self.index = result.index;
        self.search.reset();

        let report = BuildReport {
            phase: result.phase,
            top_level_count: self.tree.top_level_count,
            indexed: self.index.len(),
            fingerprint: menu_fingerprint(&self.index),
        };

        tracer.log(
            &TraceEvent::now("build")
                .with_phase(report.phase)
                .with_top_level(report.top_level_count)
                .with_indexed(report.indexed)
                .with_fingerprint(&report.fingerprint),
        );

        report
    }

    /// Filter the visible surface by keyword; returns the matching leaf
    /// snapshots in index order.
    pub fn filter(&mut self, keyword: &str, tracer: &TraceLogger) -> Vec<MenuNode> {
        let results = apply_filter(&mut self.tree, &self.index, &mut self.search, keyword);

        tracer.log(
            &TraceEvent::now("filter")
                .with_keyword(keyword)
                .with_hits(results.len()),
        );

        results
    }

    /// Trigger the leaf identified by `target_path`, short-circuiting the
    /// walk at the match. The partial tree and index from the aborted walk
    /// replace the session's state.
    pub fn trigger(
        &mut self,
        provider: &dyn AccessibilityProvider,
        pid: i32,
        target_path: &str,
        tracer: &TraceLogger,
    ) -> TriggerOutcome {
        let result = MenuBuilder::with_target(provider, target_path).build(pid);
        self.tree = result.tree;
        self.index = result.index;
        self.search.reset();

        let outcome = result.trigger.unwrap_or(TriggerOutcome::NotFound);

        tracer.log(
            &TraceEvent::now("trigger")
                .with_phase(result.phase)
                .with_path(target_path)
                .with_outcome(outcome),
        );

        outcome
    }
}
