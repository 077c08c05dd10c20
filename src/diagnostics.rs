//! Data-integrity diagnostics.
//!
//! None of the adapters fail outright.  When one meets a node it cannot
//! faithfully convert it degrades its output and reports a [`Diagnostic`] to
//! the configured [`DiagnosticSink`].  The default sink forwards to `tracing`.

use std::fmt::{self, Debug, Formatter};

use crate::nodes::NodeEmoji;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An emoji reference without a (non-empty) name reached plain-text
    /// extraction.
    MissingName,
}

/// A report about an emoji reference that could not be converted faithfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The category of the problem.
    pub kind: DiagnosticKind,
    /// Human-readable description of the issue.
    pub message: String,
    /// The offending node's attributes.
    pub node: NodeEmoji,
}

impl Diagnostic {
    pub(crate) fn missing_name(node: &NodeEmoji) -> Self {
        Diagnostic {
            kind: DiagnosticKind::MissingName,
            message: "missing data-name attribute on emoji node".to_string(),
            node: node.clone(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.message, self.node)
    }
}

/// Receives diagnostics.
pub trait DiagnosticSink {
    /// Called once per reported problem.
    fn report(&self, diagnostic: &Diagnostic);
}

impl<'c> Debug for dyn DiagnosticSink + 'c {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        formatter.write_str("<dyn DiagnosticSink>")
    }
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic),
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Logs every diagnostic at `error` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::error!(
            kind = ?diagnostic.kind,
            node = ?diagnostic.node,
            "{}",
            diagnostic.message
        );
    }
}

pub(crate) fn default_sink() -> &'static dyn DiagnosticSink {
    static SINK: TracingSink = TracingSink;
    &SINK
}
