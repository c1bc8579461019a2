//! Shallow size estimation

use crate::inspect::Inspect;

/// Reports the byte footprint of an object's own storage, excluding anything
/// it references. Must be deterministic for a given object.
pub trait SizeEstimator {
    fn shallow_size_of(&self, object: &dyn Inspect) -> u64;
}

/// Uses each type's own [`Inspect::shallow_size`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultEstimator;

impl SizeEstimator for DefaultEstimator {
    fn shallow_size_of(&self, object: &dyn Inspect) -> u64 {
        object.shallow_size()
    }
}

impl<F> SizeEstimator for F
where
    F: Fn(&dyn Inspect) -> u64,
{
    fn shallow_size_of(&self, object: &dyn Inspect) -> u64 {
        self(object)
    }
}
