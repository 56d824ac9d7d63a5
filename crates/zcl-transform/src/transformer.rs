//! Body transformers and sequential chaining
//!
//! A [`Transformer`] maps one body to another without touching its input.
//! Transformers never fail: a stage that cannot produce a usable body returns
//! a poison body (see [`crate::error_body`]) and later stages run against it
//! as usual.
//!
//! ```
//! use zcl_transform::{Chain, Transformer};
//!
//! fn append(marker: &'static str) -> impl Fn(&Vec<String>) -> Vec<String> {
//!     move |body| {
//!         let mut next = body.clone();
//!         next.push(marker.to_string());
//!         next
//!     }
//! }
//!
//! let chain: Chain<Vec<String>> = Chain::new().then(append("A")).then(append("B"));
//!
//! assert_eq!(chain.transform_body(&Vec::new()), vec!["A", "B"]);
//! ```

use crate::body::SharedBody;
use std::fmt;

/// Mapping from one body to another
///
/// Implementations must not change `body` and must always return a body;
/// failures are reported through a poison body instead.
pub trait Transformer<B = SharedBody> {
    fn transform_body(&self, body: &B) -> B;
}

impl<B, F> Transformer<B> for F
where
    F: Fn(&B) -> B,
{
    fn transform_body(&self, body: &B) -> B {
        self(body)
    }
}

type Stage<B> = Box<dyn Transformer<B> + Send + Sync>;

/// Ordered list of transformers applied one after another
///
/// A chain holds no per-call state, so one chain can be shared and applied to
/// any number of bodies.
pub struct Chain<B = SharedBody> {
    stages: Vec<Stage<B>>,
}

impl<B> Chain<B> {
    /// Create an empty chain, which returns its input unchanged
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage
    pub fn then<T>(mut self, stage: T) -> Self
    where
        T: Transformer<B> + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<B> Default for Chain<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> fmt::Debug for Chain<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stages.len())
            .finish()
    }
}

impl<B: Clone> Transformer<B> for Chain<B> {
    fn transform_body(&self, body: &B) -> B {
        let Some((first, rest)) = self.stages.split_first() else {
            tracing::trace!("empty transformer chain, returning input");
            return body.clone();
        };

        tracing::trace!(stage = 0, stages = self.stages.len(), "applying transformer");
        let mut current = first.transform_body(body);
        for (index, stage) in rest.iter().enumerate() {
            tracing::trace!(
                stage = index + 1,
                stages = self.stages.len(),
                "applying transformer"
            );
            current = stage.transform_body(&current);
        }
        current
    }
}

impl<B> FromIterator<Stage<B>> for Chain<B> {
    fn from_iter<I: IntoIterator<Item = Stage<B>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

/// Build a chain from stages of one type, applied in iteration order
pub fn chain<B, T, I>(stages: I) -> Chain<B>
where
    I: IntoIterator<Item = T>,
    T: Transformer<B> + Send + Sync + 'static,
{
    stages
        .into_iter()
        .map(|stage| Box::new(stage) as Stage<B>)
        .collect()
}
