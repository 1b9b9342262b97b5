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

use crate::{context, error::ParseError, CurveError};

/// An asset generator: a curve point deterministically derived from a 32-byte asset id
/// (`generate`), or blinded by a nonce for reissuance inputs (`blinded`), or parsed from a
/// 33-byte serialized commitment supplied on the wire (`parse`).
#[derive(Clone, PartialEq, Eq)]
pub struct Generator(secp256k1_zkp::Generator);

impl Generator {
    /// Derives the unblinded generator for an asset id.
    ///
    /// Infallible: `secp256k1_zkp` only rejects a 32-byte tag if it fails to hash to a valid
    /// curve point, which cannot happen for any of the 2^256 possible asset ids (spec.md §4.A).
    pub fn generate(asset_id: &[u8; 32]) -> Generator {
        let tag = secp256k1_zkp::Tag::from(*asset_id);
        Generator(secp256k1_zkp::Generator::new_unblinded(context::secp(), tag))
    }

    /// Derives the generator blinded by `nonce`, used to check a reissuance input's asset
    /// commitment against its claimed reissuance-token id (spec.md §4.C).
    pub fn blinded(asset_id: &[u8; 32], nonce: &[u8; 32]) -> Result<Generator, CurveError> {
        let tag = secp256k1_zkp::Tag::from(*asset_id);
        let tweak = secp256k1_zkp::Tweak::from_slice(nonce).map_err(|_| CurveError::InvalidBlindingNonce)?;
        Ok(Generator(secp256k1_zkp::Generator::new_blinded(
            context::secp(),
            tag,
            tweak,
        )))
    }

    /// Parses a 33-byte serialized generator, as carried on the wire for committed asset fields.
    pub fn parse(bytes: &[u8; 33]) -> Result<Generator, ParseError> {
        secp256k1_zkp::Generator::from_slice(bytes)
            .map(Generator)
            .map_err(|_| ParseError::InvalidEncoding)
    }

    /// Serializes the generator to its 33-byte wire form.
    pub fn serialize(&self) -> [u8; 33] {
        self.0.serialize()
    }

    pub(crate) fn as_inner(&self) -> &secp256k1_zkp::Generator {
        &self.0
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Generator({})", hex::encode(self.serialize()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn round_trip() {
        let asset_id = [7u8; 32];
        let g = Generator::generate(&asset_id);
        let bytes = g.serialize();
        let g2 = Generator::parse(&bytes).unwrap();
        assert_eq!(g, g2);
    }

    #[test]
    fn different_assets_differ() {
        let a = Generator::generate(&[1u8; 32]);
        let b = Generator::generate(&[2u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn parse_rejects_garbage() {
        let garbage = [0xffu8; 33];
        assert!(Generator::parse(&garbage).is_err());
    }

    #[test]
    fn blinding_changes_generator() {
        let asset_id = [9u8; 32];
        let unblinded = Generator::generate(&asset_id);
        let blinded = Generator::blinded(&asset_id, &[3u8; 32]).unwrap();
        assert_ne!(unblinded, blinded);
    }
}
