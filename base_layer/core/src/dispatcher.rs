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

//! The single call site that decides inline-vs-deferred execution (spec.md §4.G, §9). No other
//! component distinguishes the two paths.

use crate::cache::ProofCache;
use crate::check::CheckTask;
use crate::error::ScriptError;

/// Dispatches `task`. If `queue` is `Some`, ownership of `task` transfers to it and `Ok(())` is
/// returned immediately without running the check. If `None`, `task` runs inline and its result
/// is returned.
///
/// Dropping a queue before draining it cancels every task still inside cooperatively: nothing
/// special has to happen, the tasks are simply dropped (spec.md §5).
pub fn dispatch(
    queue: Option<&mut Vec<CheckTask>>,
    task: CheckTask,
    cache: &ProofCache,
    store_result: bool,
) -> Result<(), ScriptError> {
    match queue {
        Some(queue) => {
            queue.push(task);
            Ok(())
        },
        None => task.run(cache, store_result),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::check::BalanceCheck;
    use elements_crypto::{Commitment, Generator};

    fn balanced_task() -> CheckTask {
        let g = Generator::generate(&[1u8; 32]);
        let input = Commitment::commit(100, &[1u8; 32], &g).unwrap();
        let output = Commitment::commit(100, &[1u8; 32], &g).unwrap();
        CheckTask::Balance(BalanceCheck {
            lhs: vec![input],
            rhs: vec![output],
        })
    }

    #[test]
    fn inline_dispatch_runs_immediately() {
        let cache = ProofCache::new();
        let result = dispatch(None, balanced_task(), &cache, false);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn deferred_dispatch_enqueues_without_running() {
        let cache = ProofCache::new();
        let mut queue = Vec::new();
        let result = dispatch(Some(&mut queue), balanced_task(), &cache, false);
        assert_eq!(result, Ok(()));
        assert_eq!(queue.len(), 1);
    }
}
