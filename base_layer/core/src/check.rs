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

//! A deferrable unit of verification work (spec.md §4.D). Modeled as a sum type with a uniform
//! `run` method rather than an abstract base class with ownership transfer (spec.md §9): each
//! variant owns everything it needs to execute, so moving a `CheckTask` into a queue and running
//! it later needs nothing more than the move itself.

use elements_crypto::{tally, verify_surjection, Commitment, Generator, SurjectionProof};

use crate::cache::ProofCache;
use crate::error::ScriptError;

/// A range check bound to a value commitment, asset commitment, and script (spec.md §4.D). The
/// script is empty when this checks an issuance amount's range proof.
pub struct RangeCheck {
    pub proof: Vec<u8>,
    pub commitment: Commitment,
    pub asset_commitment: [u8; 33],
    pub script: Vec<u8>,
}

/// A Pedersen tally over the transaction's full LHS (inputs plus issuance pseudo-inputs) and RHS
/// (outputs) commitment vectors.
pub struct BalanceCheck {
    pub lhs: Vec<Commitment>,
    pub rhs: Vec<Commitment>,
}

/// A surjection check binding an output's asset generator to the accumulated target-generator
/// set and the transaction's witness txid. `proof_bytes` is retained alongside the parsed `proof`
/// purely as the proof cache's key material (spec.md §4.B): the parsed form has no stable byte
/// representation to hash.
pub struct SurjectionCheck {
    pub proof: SurjectionProof,
    pub proof_bytes: Vec<u8>,
    pub target_generators: Vec<Generator>,
    pub output_generator: Generator,
    pub witness_txid: [u8; 32],
}

/// A unit of deferrable verification work. Owns every byte and curve object it needs, so it
/// remains valid whether it runs immediately or is moved onto a caller-supplied queue and drained
/// later (spec.md §4.D, §5 "deferred checks").
pub enum CheckTask {
    Range(RangeCheck),
    Balance(BalanceCheck),
    Surjection(SurjectionCheck),
}

impl CheckTask {
    /// Runs the check against the shared proof cache, recording a positive result when
    /// `store_result` is set (spec.md §4.B: only positive results are ever cached).
    pub fn run(self, cache: &ProofCache, store_result: bool) -> Result<(), ScriptError> {
        match self {
            CheckTask::Range(check) => {
                let commitment_bytes = check.commitment.serialize();
                if cache.range_hit(&check.proof, &commitment_bytes, &check.asset_commitment, &check.script) {
                    log::trace!("range check: cache hit");
                    return Ok(());
                }
                if elements_crypto::verify_range(&check.proof, &check.commitment, &check.asset_commitment, &check.script) {
                    if store_result {
                        cache.record_range(&check.proof, &commitment_bytes, &check.asset_commitment, &check.script);
                    }
                    Ok(())
                } else {
                    Err(ScriptError::RangeProof)
                }
            },
            CheckTask::Balance(check) => {
                if tally(&check.lhs, &check.rhs) {
                    Ok(())
                } else {
                    Err(ScriptError::PedersenTally)
                }
            },
            CheckTask::Surjection(check) => {
                let targets: Vec<[u8; 33]> = check.target_generators.iter().map(|g| g.serialize()).collect();
                let output_bytes = check.output_generator.serialize();
                if cache.surjection_hit(&check.proof_bytes, &targets, &output_bytes, &check.witness_txid) {
                    log::trace!("surjection check: cache hit");
                    return Ok(());
                }
                if verify_surjection(
                    &check.proof,
                    &check.target_generators,
                    &check.output_generator,
                    &check.witness_txid,
                ) {
                    if store_result {
                        cache.record_surjection(&check.proof_bytes, &targets, &output_bytes, &check.witness_txid);
                    }
                    Ok(())
                } else {
                    Err(ScriptError::SurjectionProof)
                }
            },
        }
    }
}
