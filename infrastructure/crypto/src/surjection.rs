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

use crate::{context, error::ParseError, generator::Generator};

/// A parsed surjection proof: proves an output's asset generator is a re-randomization of one of
/// a declared set of input generators.
#[derive(Clone)]
pub struct SurjectionProof(secp256k1_zkp::SurjectionProof);

impl SurjectionProof {
    /// Parses a surjection proof from its wire encoding.
    pub fn parse(bytes: &[u8]) -> Result<SurjectionProof, ParseError> {
        if bytes.is_empty() {
            return Err(ParseError::WrongLength {
                expected: 1,
                actual: 0,
            });
        }
        secp256k1_zkp::SurjectionProof::from_slice(bytes)
            .map(SurjectionProof)
            .map_err(|_| ParseError::InvalidEncoding)
    }
}

/// Verifies that `proof` demonstrates `output_generator` inherits its asset from one of
/// `target_generators`, bound to `witness_txid` (spec.md invariant 6, §4.C glossary).
///
/// `target_generators` must be presented in the exact order the proof was constructed against —
/// input, then issuance pseudo-input, then reissuance-token pseudo-input, per input (spec.md
/// §3's pseudo-input ordering note); this function does not reorder or deduplicate them.
pub fn verify_surjection(
    proof: &SurjectionProof,
    target_generators: &[Generator],
    output_generator: &Generator,
    witness_txid: &[u8; 32],
) -> bool {
    let targets: Vec<secp256k1_zkp::Generator> = target_generators.iter().map(|g| *g.as_inner()).collect();
    proof
        .0
        .verify(context::secp(), &targets, output_generator.as_inner(), witness_txid)
        .is_ok()
}
