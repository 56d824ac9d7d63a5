//! zcl body transformers
//!
//! Composable rewrites over configuration bodies. A [`Transformer`] maps a
//! body to a new body, a [`Chain`] threads a body through several of them in
//! order, and failures are carried forward as poison bodies that report
//! their [`Diagnostics`] only when someone reads their content.

pub mod body;
pub mod diagnostics;
pub mod error_body;
pub mod transformer;

pub use body::{Attribute, Block, Body, BodyContent, SharedBody, StaticBody};
pub use diagnostics::{Diagnostic, Diagnostics, Severity, SourcePos, SourceRange};
pub use error_body::{ErrorBody, body_diagnostics, new_error_body};
pub use transformer::{Chain, Transformer, chain};
