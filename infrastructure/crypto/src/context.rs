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

//! Process-wide curve context.
//!
//! The reference implementation creates a single `secp256k1_context` at process start and tears
//! it down at shutdown (a static constructor/destructor pair, `CSecp256k1Init` in
//! `confidential_validation.cpp`). Rust has no hidden static constructors, so this is instead a
//! lazily-initialized, explicitly-owned handle, built once on first use and held for the life of
//! the process — the same `once_cell::sync::Lazy` idiom used for the process-wide shared state in
//! `examples/PolyTorus-polytorus/src/app/global.rs`.

use once_cell::sync::Lazy;
use secp256k1::{All, Secp256k1};

static CONTEXT: Lazy<Secp256k1<All>> = Lazy::new(Secp256k1::new);

/// Returns the process-wide curve context.
///
/// Safe for concurrent use by any number of verifying threads: `secp256k1_context` is documented
/// by the underlying library as safe for concurrent read-only use once created, and this handle
/// is never mutated after first construction.
pub fn secp() -> &'static Secp256k1<All> {
    &CONTEXT
}
