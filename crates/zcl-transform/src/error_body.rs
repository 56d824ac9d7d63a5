//! Poison bodies
//!
//! A transformer that cannot produce a valid result returns an [`ErrorBody`]
//! instead of failing. The body looks like any other until its content is
//! read, at which point it reports the diagnostics it was built with.

use crate::body::{Body, BodyContent, SharedBody};
use crate::diagnostics::{Diagnostics, SourceRange};
use std::sync::Arc;

/// Body whose every content query fails with the same diagnostics
#[derive(Debug, Clone)]
pub struct ErrorBody {
    diagnostics: Diagnostics,
}

impl ErrorBody {
    pub fn new(diagnostics: impl Into<Diagnostics>) -> Self {
        Self {
            diagnostics: diagnostics.into(),
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }
}

impl Body for ErrorBody {
    fn content(&self) -> Result<BodyContent, Diagnostics> {
        Err(self.diagnostics.clone())
    }

    fn missing_item_range(&self) -> SourceRange {
        self.diagnostics
            .iter()
            .find_map(|d| d.subject.clone())
            .unwrap_or_default()
    }
}

/// Build a shared poison body from diagnostics
pub fn new_error_body(diagnostics: impl Into<Diagnostics>) -> SharedBody {
    let diagnostics = diagnostics.into();
    tracing::debug!(
        count = diagnostics.len(),
        "deferring diagnostics into error body"
    );
    Arc::new(ErrorBody::new(diagnostics))
}

/// Diagnostics a content query on `body` would produce, if any
pub fn body_diagnostics(body: &dyn Body) -> Option<Diagnostics> {
    body.content().err()
}
