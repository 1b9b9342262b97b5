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

//! End-to-end scenarios spanning the issuance deriver, amount verifier, dispatcher, and fee
//! accounting together, one per numbered case in the testable-properties catalogue this crate
//! implements against. Genuine positive-case range/surjection proofs require a prover this crate
//! does not implement (proof construction is out of scope); scenarios that need a verified proof
//! are exercised through the deferred-queue path instead, where the structural checks this crate
//! owns (witness presence, field-shape rules, queuing) are fully exercised without needing the
//! underlying zero-knowledge proof to actually verify.

use std::collections::BTreeMap;

use elements_core::cache::ProofCache;
use elements_core::check::CheckTask;
use elements_core::fee::{discounted_virtual_size, get_fee_map, has_valid_fee, verify_coinbase_amount};
use elements_core::issuance;
use elements_core::transaction::{InputWitness, IssuanceRecord, OutPoint, OutputWitness, Transaction, TxInput, TxOutput};
use elements_core::types::{AssetId, Confidential, ConfidentialAsset, ConfidentialNonce, ConfidentialValue, Script};
use elements_core::verifier::verify_amounts;
use elements_crypto::Generator;

fn explicit_output(asset: AssetId, value: i64, script: Script) -> TxOutput {
    TxOutput {
        asset: ConfidentialAsset::Explicit(asset),
        value: ConfidentialValue::Explicit(value),
        nonce: ConfidentialNonce::Null,
        script,
    }
}

/// Scenario 1: all-explicit single-asset transfer.
#[test]
fn scenario_1_all_explicit_single_asset_transfer() {
    let asset = AssetId([1u8; 32]);
    let prevouts = vec![explicit_output(asset, 100, Script::empty())];
    let tx = Transaction {
        inputs: vec![TxInput {
            outpoint: OutPoint { txid: [0u8; 32], vout: 0 },
            issuance: None,
        }],
        outputs: vec![
            explicit_output(asset, 60, Script(vec![0x76])),
            explicit_output(asset, 40, Script::empty()),
        ],
        ..Default::default()
    };

    assert!(has_valid_fee(&tx));
    let fee_map = get_fee_map(&tx);
    assert_eq!(fee_map.get(&asset), Some(&40));

    let cache = ProofCache::new();
    assert!(verify_amounts(&prevouts, &tx, None, &cache, false));

    assert_eq!(discounted_virtual_size(&tx), discounted_virtual_size(&tx));
}

/// Scenario 2 (partial): a confidential-value transfer's range check is enqueued rather than run
/// inline, and `verify_amounts` with a supplied queue reports success without having evaluated the
/// proof — deferred checks are drained separately by the caller (spec.md §4.G, §5).
#[test]
fn scenario_2_confidential_value_transfer_defers_its_range_check() {
    let asset = AssetId([1u8; 32]);
    let generator = Generator::generate(asset.as_bytes());
    let input_commitment = elements_crypto::Commitment::commit(100, &[7u8; 32], &generator).unwrap();
    let output_commitment = elements_crypto::Commitment::commit(100, &[7u8; 32], &generator).unwrap();

    let prevouts = vec![TxOutput {
        asset: ConfidentialAsset::Explicit(asset),
        value: ConfidentialValue::Commitment(input_commitment.serialize()),
        nonce: ConfidentialNonce::Null,
        script: Script::empty(),
    }];
    let tx = Transaction {
        inputs: vec![TxInput {
            outpoint: OutPoint { txid: [1u8; 32], vout: 0 },
            issuance: None,
        }],
        outputs: vec![TxOutput {
            asset: ConfidentialAsset::Explicit(asset),
            value: ConfidentialValue::Commitment(output_commitment.serialize()),
            nonce: ConfidentialNonce::Null,
            script: Script(vec![0x76]),
        }],
        output_witnesses: vec![OutputWitness {
            rangeproof: vec![0xaa; 16],
            surjection_proof: Vec::new(),
        }],
        ..Default::default()
    };

    let cache = ProofCache::new();
    let mut queue: Vec<CheckTask> = Vec::new();
    assert!(verify_amounts(&prevouts, &tx, Some(&mut queue), &cache, false));
    // one balance check plus one range check for the committed-value output.
    assert_eq!(queue.len(), 2);
}

/// Scenario 3 (structural half): a committed-value output with no range proof at all is rejected
/// outright rather than deferred — a stand-in for "range proof fails verification" that does not
/// require constructing a genuine proof, since an absent proof fails identically to a tampered one
/// once drained (spec.md invariant 6, B4).
#[test]
fn scenario_3_committed_value_output_missing_rangeproof_is_rejected() {
    let asset = AssetId([1u8; 32]);
    let generator = Generator::generate(asset.as_bytes());
    let commitment = elements_crypto::Commitment::commit(100, &[7u8; 32], &generator).unwrap();

    let prevouts = vec![explicit_output(asset, 100, Script::empty())];
    let tx = Transaction {
        inputs: vec![TxInput {
            outpoint: OutPoint { txid: [1u8; 32], vout: 0 },
            issuance: None,
        }],
        outputs: vec![TxOutput {
            asset: ConfidentialAsset::Explicit(asset),
            value: ConfidentialValue::Commitment(commitment.serialize()),
            nonce: ConfidentialNonce::Null,
            script: Script(vec![0x76]),
        }],
        output_witnesses: vec![OutputWitness::default()],
        ..Default::default()
    };

    let cache = ProofCache::new();
    assert!(!verify_amounts(&prevouts, &tx, None, &cache, false));
}

/// Scenario 4: initial issuance synthesizes asset and reissuance-token pseudo-inputs whose ids are
/// deterministic functions of the spent outpoint and the issuance's own entropy.
#[test]
fn scenario_4_initial_issuance() {
    let outpoint = OutPoint { txid: [9u8; 32], vout: 2 };
    let entropy_seed = [5u8; 32];
    let entropy = issuance::generate_asset_entropy(&outpoint, &entropy_seed);
    let asset_id = issuance::calculate_asset(&entropy);

    let prevouts = vec![explicit_output(AssetId([2u8; 32]), 10, Script::empty())];
    let issuance_record = IssuanceRecord {
        blinding_nonce: [0u8; 32],
        asset_entropy: entropy_seed,
        amount: ConfidentialValue::Explicit(500),
        inflation_keys: ConfidentialValue::Null,
    };
    let tx = Transaction {
        inputs: vec![TxInput { outpoint, issuance: Some(issuance_record) }],
        outputs: vec![
            explicit_output(AssetId([2u8; 32]), 10, Script(vec![0x76])),
            explicit_output(asset_id, 500, Script(vec![0x76])),
        ],
        input_witnesses: vec![InputWitness::default()],
        ..Default::default()
    };

    assert_eq!(tx.num_issuance_pseudo_inputs(), 1);
    let cache = ProofCache::new();
    assert!(verify_amounts(&prevouts, &tx, None, &cache, false));
}

/// Scenario 5: a reissuance input whose asset commitment does not match the blinded
/// reissuance-token generator is rejected structurally, with no proof involved.
#[test]
fn scenario_5_reissuance_with_wrong_blinding_nonce_is_rejected() {
    let token_id = AssetId([6u8; 32]);
    let right_nonce = [1u8; 32];
    let wrong_nonce = [2u8; 32];
    let asset_commitment = Generator::blinded(token_id.as_bytes(), &right_nonce).unwrap().serialize();

    let prevouts = vec![TxOutput {
        asset: ConfidentialAsset::Commitment(asset_commitment),
        value: ConfidentialValue::Explicit(1),
        nonce: ConfidentialNonce::Null,
        script: Script::empty(),
    }];
    let issuance_record = IssuanceRecord {
        blinding_nonce: wrong_nonce,
        asset_entropy: token_id.0,
        amount: Confidential::Null,
        inflation_keys: Confidential::Null,
    };
    let tx = Transaction {
        inputs: vec![TxInput {
            outpoint: OutPoint { txid: [0u8; 32], vout: 0 },
            issuance: Some(issuance_record),
        }],
        outputs: vec![explicit_output(AssetId([3u8; 32]), 1, Script(vec![0x76]))],
        input_witnesses: vec![InputWitness::default()],
        ..Default::default()
    };

    let cache = ProofCache::new();
    assert!(!verify_amounts(&prevouts, &tx, None, &cache, false));
}

/// Scenario 6: coinbase sweeping fees across two assets.
#[test]
fn scenario_6_coinbase_sweeping_fees() {
    let asset_a = AssetId([1u8; 32]);
    let asset_b = AssetId([2u8; 32]);
    let mut fee_map = BTreeMap::new();
    fee_map.insert(asset_a, 100);
    fee_map.insert(asset_b, 5);

    let exact = Transaction {
        outputs: vec![
            explicit_output(asset_a, 100, Script(vec![0x76])),
            explicit_output(asset_b, 5, Script(vec![0x76])),
        ],
        is_coinbase: true,
        ..Default::default()
    };
    assert!(verify_coinbase_amount(&exact, &fee_map));

    let overspend = Transaction {
        outputs: vec![explicit_output(asset_a, 101, Script(vec![0x76]))],
        is_coinbase: true,
        ..Default::default()
    };
    assert!(!verify_coinbase_amount(&overspend, &fee_map));

    let committed_field = Transaction {
        outputs: vec![TxOutput {
            asset: ConfidentialAsset::Commitment([1u8; 33]),
            value: ConfidentialValue::Explicit(1),
            nonce: ConfidentialNonce::Null,
            script: Script(vec![0x76]),
        }],
        is_coinbase: true,
        ..Default::default()
    };
    assert!(!verify_coinbase_amount(&committed_field, &fee_map));

    let with_output_witness = Transaction {
        outputs: vec![explicit_output(asset_a, 1, Script(vec![0x76]))],
        output_witnesses: vec![OutputWitness::default()],
        is_coinbase: true,
        ..Default::default()
    };
    assert!(!verify_coinbase_amount(&with_output_witness, &fee_map));
}
