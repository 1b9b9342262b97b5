// Copyright 2018 The Tari Project
//
// Redistribution and use in source and binary forms, with or without modification, are permitted provided that the
// following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this list of conditions and the following
// disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice, this list of conditions and the
// following disclaimer in the documentation and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors may be used to endorse or promote
// products derived from this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES,
// INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY,
// WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE
// USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Memoizes positive results of range and surjection verification (spec.md §4.B). Only verified
//! proofs are ever inserted; a cache hit is therefore always safe to treat as "verifies".

use std::num::NonZeroUsize;
use std::sync::Mutex;

use blake2::{Blake2s256, Digest};
use lru::LruCache;

/// Default capacity of each memoizer. Arbitrary but generous relative to a single block's proof
/// count; tune at the call site if a deployment needs otherwise.
const DEFAULT_CAPACITY: usize = 10_000;

fn digest(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2s256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Two independent LRU memoizers, one per proof kind (spec.md §4.B). Safe for concurrent readers
/// and writers behind a mutex per map, matching the "single fine-grained mutex or sharded map is
/// acceptable" guidance of spec.md §5.
pub struct ProofCache {
    range: Mutex<LruCache<[u8; 32], ()>>,
    surjection: Mutex<LruCache<[u8; 32], ()>>,
}

impl ProofCache {
    pub fn new() -> ProofCache {
        ProofCache::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> ProofCache {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        ProofCache {
            range: Mutex::new(LruCache::new(capacity)),
            surjection: Mutex::new(LruCache::new(capacity)),
        }
    }

    fn range_key(proof: &[u8], commitment: &[u8; 33], asset_commitment: &[u8; 33], script: &[u8]) -> [u8; 32] {
        digest(&[proof, commitment, asset_commitment, script])
    }

    fn surjection_key(
        proof: &[u8],
        target_generators: &[[u8; 33]],
        output_generator: &[u8; 33],
        witness_txid: &[u8; 32],
    ) -> [u8; 32] {
        let mut sorted: Vec<&[u8; 33]> = target_generators.iter().collect();
        sorted.sort_unstable();
        let mut hasher = Blake2s256::new();
        hasher.update(proof);
        for generator in sorted {
            hasher.update(generator);
        }
        hasher.update(output_generator);
        hasher.update(witness_txid);
        hasher.finalize().into()
    }

    pub fn range_hit(&self, proof: &[u8], commitment: &[u8; 33], asset_commitment: &[u8; 33], script: &[u8]) -> bool {
        let key = Self::range_key(proof, commitment, asset_commitment, script);
        self.range.lock().unwrap().contains(&key)
    }

    pub fn record_range(&self, proof: &[u8], commitment: &[u8; 33], asset_commitment: &[u8; 33], script: &[u8]) {
        let key = Self::range_key(proof, commitment, asset_commitment, script);
        self.range.lock().unwrap().put(key, ());
    }

    pub fn surjection_hit(
        &self,
        proof: &[u8],
        target_generators: &[[u8; 33]],
        output_generator: &[u8; 33],
        witness_txid: &[u8; 32],
    ) -> bool {
        let key = Self::surjection_key(proof, target_generators, output_generator, witness_txid);
        self.surjection.lock().unwrap().contains(&key)
    }

    pub fn record_surjection(
        &self,
        proof: &[u8],
        target_generators: &[[u8; 33]],
        output_generator: &[u8; 33],
        witness_txid: &[u8; 32],
    ) {
        let key = Self::surjection_key(proof, target_generators, output_generator, witness_txid);
        self.surjection.lock().unwrap().put(key, ());
    }
}

impl Default for ProofCache {
    fn default() -> Self {
        ProofCache::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn range_cache_round_trip() {
        let cache = ProofCache::new();
        let commitment = [1u8; 33];
        let asset_commitment = [2u8; 33];
        assert!(!cache.range_hit(b"proof", &commitment, &asset_commitment, b""));
        cache.record_range(b"proof", &commitment, &asset_commitment, b"");
        assert!(cache.range_hit(b"proof", &commitment, &asset_commitment, b""));
    }

    #[test]
    fn surjection_key_order_independent() {
        let cache = ProofCache::new();
        let targets_a = [[1u8; 33], [2u8; 33]];
        let targets_b = [[2u8; 33], [1u8; 33]];
        let output = [3u8; 33];
        let txid = [4u8; 32];
        cache.record_surjection(b"proof", &targets_a, &output, &txid);
        assert!(cache.surjection_hit(b"proof", &targets_b, &output, &txid));
    }

    #[test]
    fn distinct_context_misses() {
        let cache = ProofCache::new();
        let commitment = [1u8; 33];
        let asset_commitment = [2u8; 33];
        cache.record_range(b"proof", &commitment, &asset_commitment, b"");
        assert!(!cache.range_hit(b"proof", &commitment, &asset_commitment, b"x"));
    }
}
