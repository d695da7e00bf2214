//! Account identifier generation
//!
//! Identifiers are 16 characters, each a digit 1-9 drawn uniformly at random.
//! A candidate that collides with an existing key is discarded and a fresh
//! 16-character candidate is drawn. With 9^16 possible identifiers a retry is
//! practically never needed, but the loop is still bounded.

use crate::types::{AccountId, AccountMap, LedgerError, ACCOUNT_ID_LEN};
use rand::Rng;
use tracing::warn;

/// Default bound on identifier regeneration
pub const DEFAULT_MAX_ID_ATTEMPTS: usize = 1000;

/// Draw a single 16-digit candidate
pub fn random_identifier<R: Rng + ?Sized>(rng: &mut R) -> AccountId {
    let digits: String = (0..ACCOUNT_ID_LEN)
        .map(|_| char::from(b'0' + rng.gen_range(1..=9u8)))
        .collect();

    AccountId::from_generated(digits)
}

/// Generate an identifier that is not already a key of `existing`
///
/// # Errors
///
/// Returns `LedgerError::IdentifierSpaceExhausted` if `max_attempts`
/// consecutive candidates all collide.
pub fn generate_identifier<R: Rng + ?Sized>(
    existing: &AccountMap,
    rng: &mut R,
    max_attempts: usize,
) -> Result<AccountId, LedgerError> {
    for attempt in 1..=max_attempts {
        let candidate = random_identifier(rng);
        if !existing.contains_key(&candidate) {
            return Ok(candidate);
        }
        warn!(attempt, candidate = %candidate, "generated account identifier collided, retrying");
    }

    Err(LedgerError::identifier_space_exhausted(max_attempts))
}
