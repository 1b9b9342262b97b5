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

//! The amount verifier (spec.md §4.E): walks inputs (with synthesized issuance pseudo-inputs) and
//! outputs, builds the commitment arena and target-generator set, and emits check tasks through
//! the dispatcher.

use elements_crypto::{Commitment, Generator, SurjectionProof};

use crate::cache::ProofCache;
use crate::check::{BalanceCheck, CheckTask, RangeCheck, SurjectionCheck};
use crate::consensus::money_range;
use crate::dispatcher::dispatch;
use crate::issuance;
use crate::transaction::{Transaction, TxOutput};
use crate::types::{AssetId, Confidential, ConfidentialValue};

/// Reborrows a caller's optional queue without moving it out of the enclosing function, so the
/// same `Option<&mut Vec<CheckTask>>` can be passed to `dispatch` at every emit point.
fn reborrow<'q>(queue: &'q mut Option<&mut Vec<CheckTask>>) -> Option<&'q mut Vec<CheckTask>> {
    queue.as_mut().map(|q| &mut **q)
}

/// Verifies that a transaction's confidential amounts are internally consistent (spec.md §4.E).
///
/// # Panics
///
/// Panics if `tx.is_coinbase` or if `prevouts.len() != tx.inputs.len()` — both are asserted
/// preconditions (spec.md §4.E "Preconditions (asserted, not returned)"), violations of which are
/// programming errors in the caller, not rejectable transactions.
pub fn verify_amounts(
    prevouts: &[TxOutput],
    tx: &Transaction,
    mut queue: Option<&mut Vec<CheckTask>>,
    cache: &ProofCache,
    store_result: bool,
) -> bool {
    assert!(!tx.is_coinbase, "verify_amounts must not be called on a coinbase transaction");
    assert_eq!(prevouts.len(), tx.inputs.len(), "prevout count must equal input count");

    log::trace!(
        "verify_amounts: {} input(s), {} output(s), deferred={}",
        tx.inputs.len(),
        tx.outputs.len(),
        queue.is_some()
    );
    let result = run(prevouts, tx, &mut queue, cache, store_result);
    if result.is_err() {
        log::trace!("verify_amounts: rejected");
    }
    result.is_ok()
}

/// Derives the asset generator for `field`, the way both input and output walks need it:
/// unblinded from the explicit asset id, or parsed directly from a committed 33-byte generator.
fn field_generator(field: &Confidential<AssetId>) -> Result<Generator, ()> {
    match field {
        Confidential::Explicit(asset_id) => Ok(Generator::generate(asset_id.as_bytes())),
        Confidential::Commitment(bytes) => Generator::parse(bytes).map_err(|_| ()),
        Confidential::Null => Err(()),
    }
}

/// §4.E.1: derives the commitment for one issuance sub-amount (`amount` or `inflation_keys`),
/// emitting a range check when it is committed.
fn verify_issuance_amount(
    asset_id: &AssetId,
    value: &ConfidentialValue,
    rangeproof: &[u8],
    queue: &mut Option<&mut Vec<CheckTask>>,
    cache: &ProofCache,
    store_result: bool,
) -> Result<Commitment, ()> {
    let generator = Generator::generate(asset_id.as_bytes());
    match value {
        Confidential::Explicit(v) => {
            if *v == 0 || !money_range(*v) {
                return Err(());
            }
            if !rangeproof.is_empty() {
                return Err(());
            }
            Commitment::commit(*v as u64, &[0u8; 32], &generator).map_err(|_| ())
        },
        Confidential::Commitment(bytes) => {
            let commitment = Commitment::parse(bytes).map_err(|_| ())?;
            let task = CheckTask::Range(RangeCheck {
                proof: rangeproof.to_vec(),
                commitment: commitment.clone(),
                asset_commitment: generator.serialize(),
                script: Vec::new(),
            });
            dispatch(reborrow(queue), task, cache, store_result).map_err(|_| ())?;
            Ok(commitment)
        },
        Confidential::Null => Err(()),
    }
}

fn run(
    prevouts: &[TxOutput],
    tx: &Transaction,
    queue: &mut Option<&mut Vec<CheckTask>>,
    cache: &ProofCache,
    store_result: bool,
) -> Result<(), ()> {
    let witness_txid = tx.witness_txid();

    let capacity = tx.inputs.len() + tx.outputs.len() + tx.num_issuance_pseudo_inputs();
    let mut storage: Vec<Commitment> = Vec::with_capacity(capacity);
    let mut lhs_indices: Vec<usize> = Vec::new();
    let mut rhs_indices: Vec<usize> = Vec::new();
    let mut target_generators: Vec<Generator> = Vec::new();

    // 4. Walk inputs.
    for (i, input) in tx.inputs.iter().enumerate() {
        let prevout = &prevouts[i];
        if prevout.asset.is_null() || prevout.value.is_null() {
            return Err(());
        }

        let generator = field_generator(&prevout.asset)?;
        target_generators.push(generator.clone());

        let commitment = match &prevout.value {
            Confidential::Explicit(value) => {
                if *value == 0 || !money_range(*value) {
                    return Err(());
                }
                Commitment::commit(*value as u64, &[0u8; 32], &generator).map_err(|_| ())?
            },
            Confidential::Commitment(bytes) => Commitment::parse(bytes).map_err(|_| ())?,
            Confidential::Null => unreachable!("checked above"),
        };
        storage.push(commitment);
        lhs_indices.push(storage.len() - 1);

        if let Some(record) = &input.issuance {
            let issued = issuance::derive(&input.outpoint, record);

            if record.is_reissuance() {
                let spent_generator_bytes = generator.serialize();
                if !issuance::reissuance_generator_matches(&issued.token_id, &record.blinding_nonce, &spent_generator_bytes)
                {
                    return Err(());
                }
                if !record.inflation_keys.is_null() {
                    return Err(());
                }
            }

            if !record.amount.is_valid() {
                return Err(());
            }
            if !record.amount.is_null() {
                let rangeproof = tx
                    .input_witnesses
                    .get(i)
                    .map(|w| w.issuance_amount_rangeproof.as_slice())
                    .ok_or(())?;
                let commitment =
                    verify_issuance_amount(&issued.asset_id, &record.amount, rangeproof, queue, cache, store_result)?;
                target_generators.push(Generator::generate(issued.asset_id.as_bytes()));
                storage.push(commitment);
                lhs_indices.push(storage.len() - 1);
            }

            if !record.inflation_keys.is_valid() {
                return Err(());
            }
            if !record.inflation_keys.is_null() {
                let rangeproof = tx
                    .input_witnesses
                    .get(i)
                    .map(|w| w.inflation_keys_rangeproof.as_slice())
                    .ok_or(())?;
                let commitment = verify_issuance_amount(
                    &issued.token_id,
                    &record.inflation_keys,
                    rangeproof,
                    queue,
                    cache,
                    store_result,
                )?;
                target_generators.push(Generator::generate(issued.token_id.as_bytes()));
                storage.push(commitment);
                lhs_indices.push(storage.len() - 1);
            }
        }
    }

    // 5. Walk outputs.
    for output in &tx.outputs {
        if output.asset.is_null() || output.value.is_null() {
            return Err(());
        }
        if !output.nonce.is_valid() {
            return Err(());
        }

        let generator = field_generator(&output.asset)?;

        match &output.value {
            Confidential::Explicit(value) => {
                if !money_range(*value) {
                    return Err(());
                }
                if *value == 0 {
                    if !output.script.is_unspendable() {
                        return Err(());
                    }
                    continue;
                }
                let commitment = Commitment::commit(*value as u64, &[0u8; 32], &generator).map_err(|_| ())?;
                storage.push(commitment);
                rhs_indices.push(storage.len() - 1);
            },
            Confidential::Commitment(bytes) => {
                let commitment = Commitment::parse(bytes).map_err(|_| ())?;
                storage.push(commitment);
                rhs_indices.push(storage.len() - 1);
            },
            Confidential::Null => unreachable!("checked above"),
        }
    }

    // 6. Balance check.
    let lhs: Vec<Commitment> = lhs_indices.iter().map(|&idx| storage[idx].clone()).collect();
    let rhs: Vec<Commitment> = rhs_indices.iter().map(|&idx| storage[idx].clone()).collect();
    dispatch(reborrow(queue), CheckTask::Balance(BalanceCheck { lhs, rhs }), cache, store_result).map_err(|_| ())?;

    // 7. Range proofs.
    for (j, output) in tx.outputs.iter().enumerate() {
        let witness = tx.output_witnesses.get(j);
        match &output.value {
            Confidential::Commitment(value_bytes) => {
                let witness = witness.ok_or(())?;
                if witness.rangeproof.is_empty() {
                    return Err(());
                }
                let commitment = Commitment::parse(value_bytes).map_err(|_| ())?;
                let asset_commitment = match &output.asset {
                    Confidential::Explicit(asset_id) => Generator::generate(asset_id.as_bytes()).serialize(),
                    Confidential::Commitment(bytes) => *bytes,
                    Confidential::Null => unreachable!("checked above"),
                };
                let task = CheckTask::Range(RangeCheck {
                    proof: witness.rangeproof.clone(),
                    commitment,
                    asset_commitment,
                    script: output.script.0.clone(),
                });
                dispatch(reborrow(queue), task, cache, store_result).map_err(|_| ())?;
            },
            Confidential::Explicit(_) => {
                if let Some(w) = witness {
                    if !w.rangeproof.is_empty() {
                        return Err(());
                    }
                }
            },
            Confidential::Null => unreachable!("checked above"),
        }
    }

    // 8. Surjection proofs.
    for (j, output) in tx.outputs.iter().enumerate() {
        let witness = tx.output_witnesses.get(j);
        match &output.asset {
            Confidential::Commitment(bytes) => {
                let witness = witness.ok_or(())?;
                if witness.surjection_proof.is_empty() {
                    return Err(());
                }
                let proof = SurjectionProof::parse(&witness.surjection_proof).map_err(|_| ())?;
                let output_generator = Generator::parse(bytes).map_err(|_| ())?;
                let task = CheckTask::Surjection(SurjectionCheck {
                    proof,
                    proof_bytes: witness.surjection_proof.clone(),
                    target_generators: target_generators.clone(),
                    output_generator,
                    witness_txid,
                });
                dispatch(reborrow(queue), task, cache, store_result).map_err(|_| ())?;
            },
            Confidential::Explicit(_) => {
                if let Some(w) = witness {
                    if !w.surjection_proof.is_empty() {
                        return Err(());
                    }
                }
            },
            Confidential::Null => unreachable!("checked above"),
        }
    }

    Ok(())
}
