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

//! Asset id and reissuance-token id derivation (spec.md §4.C).

use blake2::{Blake2s256, Digest};

use crate::transaction::{IssuanceRecord, OutPoint};
use crate::types::AssetId;
use elements_crypto::Generator;

fn tagged_hash(tag: &str, leaves: &[&[u8; 32]]) -> [u8; 32] {
    let tag_hash = Blake2s256::digest(tag.as_bytes());
    let mut hasher = Blake2s256::new();
    hasher.update(tag_hash);
    hasher.update(tag_hash);
    for leaf in leaves {
        hasher.update(leaf);
    }
    hasher.finalize().into()
}

/// `GenerateAssetEntropy`: combines the spent outpoint with the issuance's own entropy seed so
/// two issuances spending different outpoints can never collide on the same asset id, even with
/// identical `asset_entropy` (spec.md §4.C, initial issuance).
pub fn generate_asset_entropy(outpoint: &OutPoint, asset_entropy: &[u8; 32]) -> [u8; 32] {
    let mut outpoint_leaf = [0u8; 32];
    outpoint_leaf[..28].copy_from_slice(&outpoint.txid[..28]);
    outpoint_leaf[28..].copy_from_slice(&outpoint.vout.to_le_bytes());
    tagged_hash("elements/issuance/entropy", &[&outpoint.txid, &outpoint_leaf, asset_entropy])
}

/// `AssetHash`: the asset id derived from entropy.
pub fn calculate_asset(entropy: &[u8; 32]) -> AssetId {
    AssetId(tagged_hash("elements/issuance/asset", &[entropy]))
}

/// `TokenHash`: the reissuance-token id derived from entropy. Distinguishes confidential-amount
/// issuances from explicit ones so a token minted against a blinded issuance cannot later
/// reissue an explicit one or vice versa (spec.md §4.C).
pub fn calculate_reissuance_token(entropy: &[u8; 32], is_confidential_amount: bool) -> AssetId {
    let discriminant = [is_confidential_amount as u8; 32];
    AssetId(tagged_hash("elements/issuance/token", &[entropy, &discriminant]))
}

/// The asset id and reissuance-token id of an issuance, plus the entropy used on reissuance to
/// verify the input's claimed blinded generator (spec.md §4.C).
pub struct IssuedAssets {
    pub asset_id: AssetId,
    pub token_id: AssetId,
    pub entropy: [u8; 32],
}

/// Derives `asset_id`/`token_id` for an issuance attached to the input at `outpoint`.
pub fn derive(outpoint: &OutPoint, issuance: &IssuanceRecord) -> IssuedAssets {
    let is_confidential_amount = issuance.amount.is_commitment();
    if issuance.is_reissuance() {
        let entropy = issuance.asset_entropy;
        IssuedAssets {
            asset_id: calculate_asset(&entropy),
            token_id: calculate_reissuance_token(&entropy, is_confidential_amount),
            entropy,
        }
    } else {
        let entropy = generate_asset_entropy(outpoint, &issuance.asset_entropy);
        IssuedAssets {
            asset_id: calculate_asset(&entropy),
            token_id: calculate_reissuance_token(&entropy, is_confidential_amount),
            entropy,
        }
    }
}

/// Checks a reissuance input's asset commitment against the blinded generator derived from its
/// claimed token id and nonce (spec.md §4.C, invariant 4). The comparison is byte-for-byte on
/// the serialized generator: spec.md §9 preserves the original's choice of comparing serialized
/// bytes rather than parsing both sides and comparing curve points, so a commitment that
/// round-trips through parsing to the same point but was not serialized identically is still
/// rejected.
pub fn reissuance_generator_matches(token_id: &AssetId, nonce: &[u8; 32], asset_commitment: &[u8; 33]) -> bool {
    match Generator::blinded(token_id.as_bytes(), nonce) {
        Ok(generator) => &generator.serialize() == asset_commitment,
        Err(_) => false,
    }
}
