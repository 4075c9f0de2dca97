//! The decision rule: tallied counts → next proposal.

use super::ValueTally;
use rand::Rng;
use shared_types::Value;

/// Derive the next proposal from one round's tally.
///
/// In priority order:
/// 1. `Zero` if strictly more than N/2 participants sent `Zero`;
/// 2. `One` if strictly more than N/2 sent `One`;
/// 3. otherwise a uniformly random coin flip between `Zero` and `One`.
///
/// `2 * count > n` is the integer form of the strict-majority test
/// `count > n / 2` under real division.
///
/// The coin flip uses local randomness per participant. That is weaker than
/// the common coin a binary Byzantine consensus protocol needs for a
/// convergence guarantee: with split inputs, participants may keep flipping
/// to different values indefinitely. Known limitation of the protocol this
/// implements, not something to correct here.
pub fn next_proposal<R: Rng + ?Sized>(tally: &ValueTally, n: usize, rng: &mut R) -> Value {
    for candidate in [Value::Zero, Value::One] {
        if 2 * tally.count(candidate) > n {
            return candidate;
        }
    }
    if rng.gen_bool(0.5) {
        Value::One
    } else {
        Value::Zero
    }
}
