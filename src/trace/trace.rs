use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::menu::builder::{BuildPhase, TriggerOutcome};

/// One structured log record covering a build, filter or trigger operation.
#[derive(Debug, Serialize)]
pub struct TraceEvent {
    pub timestamp_ms: u128,
    pub op: String,

    pub phase: Option<String>,

    pub keyword: Option<String>,
    pub path: Option<String>,
    pub outcome: Option<String>,

    pub top_level: Option<usize>,
    pub indexed: Option<usize>,
    pub hits: Option<usize>,
    pub fingerprint: Option<String>,
}

impl TraceEvent {
    pub fn now(op: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
            op: op.to_string(),
            phase: None,
            keyword: None,
            path: None,
            outcome: None,
            top_level: None,
            indexed: None,
            hits: None,
            fingerprint: None,
        }
    }

    pub fn with_phase(mut self, phase: BuildPhase) -> Self {
        self.phase = Some(format!("{:?}", phase));
        self
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn with_outcome(mut self, outcome: TriggerOutcome) -> Self {
        self.outcome = Some(format!("{:?}", outcome));
        self
    }

    pub fn with_top_level(mut self, top_level: usize) -> Self {
        self.top_level = Some(top_level);
        self
    }

    pub fn with_indexed(mut self, indexed: usize) -> Self {
        self.indexed = Some(indexed);
        self
    }

    pub fn with_hits(mut self, hits: usize) -> Self {
        self.hits = Some(hits);
        self
    }

    pub fn with_fingerprint(mut self, fingerprint: &str) -> Self {
        self.fingerprint = Some(fingerprint.to_string());
        self
    }
}
