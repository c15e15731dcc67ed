//! Order-independent composite key for undirected edges.

use core::hash::{Hash, Hasher};
use std::collections::hash_map::DefaultHasher;

/// Hashes one identity with a fixed-seed hasher.
///
/// The pair combination below needs per-element hashes it can mix
/// commutatively, independent of whichever `BuildHasher` the surrounding
/// index uses.
#[inline]
fn element_hash<V: Hash>(value: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// The identity of an undirected edge: `{u, v}` with `{u, v} == {v, u}`.
///
/// Equality and hashing are order-independent, so every lookup path (exists,
/// weight, removal) finds the edge regardless of which argument order the
/// original insertion used. A self-pair (`u == v`) is an ordinary key.
#[derive(Debug, Clone)]
pub struct PairKey<V> {
    a: V,
    b: V,
}

impl<V> PairKey<V> {
    /// Builds the key for the unordered pair `{a, b}`.
    pub fn new(a: V, b: V) -> Self {
        Self { a, b }
    }
}

impl<V: PartialEq> PartialEq for PairKey<V> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<V: Eq> Eq for PairKey<V> {}

impl<V: Hash> Hash for PairKey<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // XOR and wrapping-add are both commutative, and together they keep
        // {a,b} distinguishable from most {c,d} with colliding XOR alone.
        let ha = element_hash(&self.a);
        let hb = element_hash(&self.b);
        state.write_u64(ha ^ hb);
        state.write_u64(ha.wrapping_add(hb));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    #[test]
    fn equality_ignores_order() {
        assert_eq!(PairKey::new("u", "v"), PairKey::new("v", "u"));
        assert_eq!(PairKey::new(1, 2), PairKey::new(2, 1));
        assert_ne!(PairKey::new(1, 2), PairKey::new(1, 3));
    }

    #[test]
    fn hash_ignores_order() {
        let s = RandomState::new();
        assert_eq!(
            s.hash_one(&PairKey::new("u", "v")),
            s.hash_one(&PairKey::new("v", "u"))
        );
    }

    #[test]
    fn self_pair_is_a_plain_key() {
        assert_eq!(PairKey::new(7, 7), PairKey::new(7, 7));
        assert_ne!(PairKey::new(7, 7), PairKey::new(7, 8));
    }
}
