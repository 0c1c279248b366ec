//! Ordered, first-match resolution over labelled tiers.
//!
//! Each tier is a closure evaluated lazily in insertion order; the first one
//! returning `Some` wins and later tiers are never run.

/// A value together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<S, T> {
    pub source: S,
    pub value: T,
}

type Tier<'a, S, T> = (S, Box<dyn FnOnce() -> Option<T> + 'a>);

/// Priority-ordered list of tiers.
pub struct TierChain<'a, S, T> {
    tiers: Vec<Tier<'a, S, T>>,
}

impl<'a, S, T> Default for TierChain<'a, S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, S, T> TierChain<'a, S, T> {
    pub fn new() -> Self {
        Self { tiers: Vec::new() }
    }

    /// Append a tier with lower priority than every tier added before it.
    pub fn tier(mut self, source: S, resolve: impl FnOnce() -> Option<T> + 'a) -> Self {
        self.tiers.push((source, Box::new(resolve)));
        self
    }

    /// Run tiers in order and return the first value found.
    pub fn resolve(self) -> Option<Resolved<S, T>> {
        self.tiers
            .into_iter()
            .find_map(|(source, resolve)| resolve().map(|value| Resolved { source, value }))
    }
}
