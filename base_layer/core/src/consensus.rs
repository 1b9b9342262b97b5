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

//! Consensus-visible constants (spec.md §6). A conformant verifier must agree on these exactly;
//! they are not configuration.

/// The monetary cap. Mirrors Bitcoin/Elements' `21_000_000 * COIN`.
pub const MAX_MONEY: Amount = 21_000_000 * 100_000_000;

/// Segregated-witness style discount applied by `discounted_virtual_size` (spec.md §4.F).
pub const WITNESS_SCALE_FACTOR: i64 = 4;

/// Size in bytes of an explicit 8-byte amount.
pub const EXPLICIT_VALUE_SIZE: usize = 8;
/// Size in bytes of an explicit 32-byte asset id.
pub const EXPLICIT_ASSET_SIZE: usize = 32;
/// Size in bytes of a serialized commitment or generator.
pub const COMMITMENT_SIZE: usize = 33;

/// Explicit transaction amount. Signed to mirror the hosting chain's `CAmount`, though
/// `MoneyRange` restricts every value this verifier accepts to `[0, MAX_MONEY]`.
pub type Amount = i64;

/// `0 <= v <= MAX_MONEY` (spec.md glossary).
pub fn money_range(v: Amount) -> bool {
    (0..=MAX_MONEY).contains(&v)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn boundaries() {
        assert!(money_range(0));
        assert!(money_range(MAX_MONEY));
        assert!(!money_range(-1));
        assert!(!money_range(MAX_MONEY + 1));
    }
}
