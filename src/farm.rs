//! Faster (but not DoS-resistant) hashmap for word tallies
use farmhash;
use std::collections::HashMap;
use std::hash::{Hash, Hasher, BuildHasherDefault};

/// Act like a streaming farmhash
///
/// Farmhash isn't a streaming hash, so each write is chained onto the last
/// one by using the previous state as the seed. `str` keys write their bytes
/// and then a terminator byte, so both writes have to count.
pub struct FarmHashChain(u64);

impl Default for FarmHashChain {
    #[inline]
    fn default() -> FarmHashChain { FarmHashChain(0) }
}

impl Hasher for FarmHashChain {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.0 = farmhash::hash64_with_seed(bytes, self.0);
    }
}

pub type Farm = BuildHasherDefault<FarmHashChain>;
pub type FarmMap<X, Y> = HashMap<X, Y, Farm>;

pub fn new_farm<X: Hash+Eq, Y>() -> FarmMap<X, Y> {
    Default::default()
}
