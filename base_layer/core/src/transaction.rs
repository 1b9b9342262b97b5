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

use blake2::{Blake2s256, Digest};

use crate::types::{ConfidentialAsset, ConfidentialNonce, ConfidentialValue, Script};

//----------------------------------------      OutPoint / TxInput     -----------------------------------------------//

/// A reference to the output a `TxInput` spends.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct OutPoint {
    pub txid: [u8; 32],
    pub vout: u32,
}

/// Attached to an input that issues or reissues an asset (spec.md §3 "Issuance record").
///
/// `blinding_nonce` all-zero distinguishes initial issuance from reissuance; `asset_entropy`'s
/// meaning depends on which mode this is (raw entropy seed on initial issuance, the asset's own
/// entropy directly on reissuance — see `crate::issuance`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct IssuanceRecord {
    pub blinding_nonce: [u8; 32],
    pub asset_entropy: [u8; 32],
    pub amount: ConfidentialValue,
    pub inflation_keys: ConfidentialValue,
}

impl IssuanceRecord {
    pub fn is_reissuance(&self) -> bool {
        self.blinding_nonce != [0u8; 32]
    }
}

/// A transaction input: a reference to a previously-created output, plus an optional issuance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TxInput {
    pub outpoint: OutPoint,
    pub issuance: Option<IssuanceRecord>,
}

//----------------------------------------        TxOutput            -----------------------------------------------//

/// A transaction output carrying a (possibly blinded) asset, value, and ECDH nonce.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TxOutput {
    pub asset: ConfidentialAsset,
    pub value: ConfidentialValue,
    pub nonce: ConfidentialNonce,
    pub script: Script,
}

impl TxOutput {
    /// Fee outputs are recognizable by an empty script with both fields explicit (spec.md §3);
    /// they may carry no other field shape.
    pub fn is_fee(&self) -> bool {
        self.script.is_empty() && self.asset.is_explicit() && self.value.is_explicit()
    }
}

//----------------------------------------      Witness bundle        -----------------------------------------------//

/// Per-input witness data (spec.md §3 "Witness bundle").
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct InputWitness {
    pub issuance_amount_rangeproof: Vec<u8>,
    pub inflation_keys_rangeproof: Vec<u8>,
}

/// Per-output witness data.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct OutputWitness {
    pub rangeproof: Vec<u8>,
    pub surjection_proof: Vec<u8>,
}

//----------------------------------------       Transaction          -----------------------------------------------//

/// A transaction as seen by the amount verifier: already deserialized, with witness arrays that
/// may be shorter than `inputs`/`outputs` (an index past the end of a witness array means "no
/// witness data was supplied for this position", not "empty witness").
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Transaction {
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub input_witnesses: Vec<InputWitness>,
    pub output_witnesses: Vec<OutputWitness>,
    pub is_coinbase: bool,
}

impl Transaction {
    /// Number of (asset, reissuance-token) pseudo-inputs this transaction's issuances will
    /// synthesize — used only to size the commitment-storage `Vec` up front; the actual walk in
    /// `crate::verifier` is the source of truth for which pseudo-inputs are appended (spec.md §9
    /// notes that a mismatch here is exactly the bug class the raw-pointer design invited; sizing
    /// with this helper and then pushing onto a growable `Vec` rather than indexing a fixed
    /// buffer removes the hazard rather than merely re-deriving the same count more carefully).
    pub fn num_issuance_pseudo_inputs(&self) -> usize {
        self.inputs
            .iter()
            .filter_map(|i| i.issuance.as_ref())
            .map(|iss| usize::from(!iss.amount.is_null()) + usize::from(!iss.inflation_keys.is_null()))
            .sum()
    }

    /// A stand-in for the hosting chain's witness-transaction-id hash, used only to bind
    /// surjection-proof verification to this specific transaction (spec.md glossary, "Witness
    /// txid"). The wire encoding of a full transaction is out of this spec's scope (spec.md §1),
    /// so this hashes the parts of the transaction that make it unique instead of a canonical
    /// serialization.
    pub fn witness_txid(&self) -> [u8; 32] {
        let mut hasher = Blake2s256::new();
        for input in &self.inputs {
            hasher.update(input.outpoint.txid);
            hasher.update(input.outpoint.vout.to_le_bytes());
        }
        for witness in &self.input_witnesses {
            hasher.update(&witness.issuance_amount_rangeproof);
            hasher.update(&witness.inflation_keys_rangeproof);
        }
        for witness in &self.output_witnesses {
            hasher.update(&witness.rangeproof);
            hasher.update(&witness.surjection_proof);
        }
        hasher.finalize().into()
    }
}
