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

//! Confidential transaction amount verification for an Elements-style sidechain: the balance,
//! range-proof and surjection-proof engine that decides whether a transaction's commitments are
//! internally consistent, plus fee aggregation, the coinbase amount check, and discounted virtual
//! size. Curve arithmetic itself lives one layer down in `elements_crypto`; nothing in this crate
//! touches `secp256k1_zkp` directly.

pub mod cache;
pub mod check;
pub mod config;
pub mod consensus;
pub mod dispatcher;
pub mod error;
pub mod fee;
pub mod issuance;
pub mod transaction;
pub mod types;
pub mod verifier;

pub use cache::ProofCache;
pub use check::CheckTask;
pub use config::VerifierConfig;
pub use error::ScriptError;
pub use fee::{discounted_virtual_size, get_fee_map, has_valid_fee, verify_coinbase_amount};
pub use verifier::verify_amounts;
