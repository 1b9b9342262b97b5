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

//! Thin, total-function wrapper over the `secp256k1-zkp` curve library.
//!
//! Nothing outside this crate should import `secp256k1_zkp` or `secp256k1` directly: every
//! generator, commitment, and proof type a caller needs is re-exported from here, and every
//! operation that can fail returns a `Result` rather than panicking, except the two
//! infallibilities asserted by the library's own contract (see `generator::generate`).

pub mod commitment;
pub mod context;
pub mod error;
pub mod generator;
pub mod surjection;

pub use commitment::{tally, Commitment};
pub use error::{CurveError, ParseError};
pub use generator::Generator;
pub use surjection::{verify_surjection, SurjectionProof};

/// Size in bytes of a serialized generator or Pedersen commitment.
pub const SERIALIZED_POINT_SIZE: usize = 33;

/// Size in bytes of an asset id, blinding nonce, or blinding factor.
pub const SCALAR_SIZE: usize = 32;

/// Verifies a range proof bound to a value commitment, asset commitment and spending script.
///
/// `script` is the empty slice when verifying an issuance-amount range proof (spec.md §4.E.1),
/// since issuance pseudo-inputs have no script of their own. The script bytes are passed to the
/// proof system as the "extra committed data" input, the same binding Elements itself uses to
/// tie a range proof to the output it was constructed for.
pub fn verify_range(proof: &[u8], commitment: &Commitment, asset_commitment: &[u8; 33], script: &[u8]) -> bool {
    if proof.is_empty() {
        return false;
    }
    let generator = match generator::Generator::parse(asset_commitment) {
        Ok(g) => g,
        Err(_) => return false,
    };
    let secp = context::secp();
    match secp256k1_zkp::RangeProof::from_slice(proof) {
        Ok(rp) => rp
            .verify_with_additional_data(secp, commitment.as_inner(), generator.as_inner(), script)
            .is_ok(),
        Err(_) => false,
    }
}
