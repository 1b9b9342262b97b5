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

use crate::{context, error::ParseError, generator::Generator, CurveError};

/// A Pedersen commitment to a (value, blinding factor) pair under some asset generator.
#[derive(Clone, PartialEq, Eq)]
pub struct Commitment(secp256k1_zkp::PedersenCommitment);

impl Commitment {
    /// Commits to `value` under `generator` with blinding factor `blinding`.
    ///
    /// Fails only when `value == 0` and `blinding` is all-zero, which is not representable as a
    /// commitment (it would be the point at infinity). Callers must pre-check
    /// `value != 0 || blinding != [0; 32]` per spec.md invariant 2 — explicit values committed
    /// with a zero blinding factor are always non-zero in this verifier.
    pub fn commit(value: u64, blinding: &[u8; 32], generator: &Generator) -> Result<Commitment, CurveError> {
        let tweak = secp256k1_zkp::Tweak::from_slice(blinding).map_err(|_| CurveError::ZeroCommitment)?;
        secp256k1_zkp::PedersenCommitment::new(context::secp(), value, tweak, *generator.as_inner())
            .map(Commitment)
            .map_err(|_| CurveError::ZeroCommitment)
    }

    /// Parses a 33-byte serialized commitment, as carried on the wire for committed value fields.
    pub fn parse(bytes: &[u8; 33]) -> Result<Commitment, ParseError> {
        secp256k1_zkp::PedersenCommitment::from_slice(bytes)
            .map(Commitment)
            .map_err(|_| ParseError::InvalidEncoding)
    }

    /// Serializes the commitment to its 33-byte wire form.
    pub fn serialize(&self) -> [u8; 33] {
        self.0.serialize()
    }

    pub(crate) fn as_inner(&self) -> &secp256k1_zkp::PedersenCommitment {
        &self.0
    }
}

impl std::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Commitment({})", hex::encode(self.serialize()))
    }
}

/// Verifies that the sum of `inputs` equals the sum of `outputs` (the Pedersen tally, spec.md
/// invariant 5). Balances independently per asset because each commitment is blinded under its
/// own asset generator; cross-asset cancellation is cryptographically infeasible.
pub fn tally(inputs: &[Commitment], outputs: &[Commitment]) -> bool {
    let ins: Vec<secp256k1_zkp::PedersenCommitment> = inputs.iter().map(|c| c.0).collect();
    let outs: Vec<secp256k1_zkp::PedersenCommitment> = outputs.iter().map(|c| c.0).collect();
    secp256k1_zkp::verify_commitments_sum_to_equal(context::secp(), &ins, &outs)
}
