/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Idempotency tokens for `CreatorRequestId` members.
//!
//! `CreateHttpNamespace`, `CreatePrivateDnsNamespace`, `CreatePublicDnsNamespace`,
//! `CreateService` and `RegisterInstance` let a failed request be retried without running the
//! operation twice. When the caller leaves `creator_request_id` unset, a UUIDv4 from the
//! configured [`IdempotencyTokenProvider`] is sent instead.

use std::fmt;
use std::sync::{Arc, Mutex};

const VERSION_MASK: u128 = 0xF << 76;
const VARIANT_MASK: u128 = 0x3 << 62;

/// Formats 128 random bits as a version 4 UUID.
///
/// The version nibble becomes `4` and the two variant bits become `10`; the other 122 bits are
/// taken from `bits` unchanged.
pub(crate) fn uuid_v4(bits: u128) -> String {
    let bits = (bits & !VERSION_MASK & !VARIANT_MASK) | (0x4 << 76) | (0x2 << 62);
    let hex = format!("{:032x}", bits);
    format!(
        "{}-{}-{}-{}-{}",
        &hex[..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..]
    )
}

#[derive(Clone)]
enum Inner {
    Random,
    Seeded(Arc<Mutex<fastrand::Rng>>),
    Fixed(String),
}

/// Source of idempotency tokens.
///
/// The default draws from the thread-local `fastrand` generator. Tests can make tokens
/// reproducible with [`IdempotencyTokenProvider::with_seed`] or pin them with
/// [`IdempotencyTokenProvider::fixed`].
#[derive(Clone)]
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

impl IdempotencyTokenProvider {
    /// Random UUIDv4 tokens.
    pub fn random() -> Self {
        Self {
            inner: Inner::Random,
        }
    }

    /// UUIDv4 tokens from a generator seeded with `seed`. Clones share the generator.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Seeded(Arc::new(Mutex::new(fastrand::Rng::with_seed(seed)))),
        }
    }

    /// Always returns `token`.
    pub fn fixed(token: impl Into<String>) -> Self {
        Self {
            inner: Inner::Fixed(token.into()),
        }
    }

    /// Produces the next token.
    pub fn make_idempotency_token(&self) -> String {
        let token = match &self.inner {
            Inner::Random => uuid_v4(fastrand::u128(..)),
            Inner::Seeded(rng) => {
                let bits = match rng.lock() {
                    Ok(mut rng) => rng.u128(..),
                    Err(poisoned) => poisoned.into_inner().u128(..),
                };
                uuid_v4(bits)
            }
            Inner::Fixed(token) => token.clone(),
        };
        tracing::trace!(token = %token, "generated idempotency token");
        token
    }
}

impl Default for IdempotencyTokenProvider {
    fn default() -> Self {
        Self::random()
    }
}

impl fmt::Debug for IdempotencyTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.inner {
            Inner::Random => "Random",
            Inner::Seeded(_) => "Seeded",
            Inner::Fixed(_) => "Fixed",
        };
        f.debug_tuple("IdempotencyTokenProvider").field(&kind).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn version_and_variant_are_stamped() {
        assert_eq!(uuid_v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(uuid_v4(0xbc4ff2), "00000000-0000-4000-8000-000000bc4ff2");
        assert_eq!(
            uuid_v4(u128::MAX),
            "ffffffff-ffff-4fff-bfff-ffffffffffff"
        );
        assert_eq!(
            uuid_v4(0x0123_4567_89ab_cdef_0123_4567_89ab_cdef),
            "01234567-89ab-4def-8123-456789abcdef"
        );
    }

    #[test]
    fn default_provider_makes_uuids() {
        assert_valid(IdempotencyTokenProvider::default().make_idempotency_token());
    }

    #[test]
    fn seeded_providers_repeat() {
        let a = IdempotencyTokenProvider::with_seed(123);
        let b = IdempotencyTokenProvider::with_seed(123);
        let first = a.make_idempotency_token();
        assert_eq!(first, b.make_idempotency_token());
        assert_ne!(first, a.make_idempotency_token());
        assert_valid(first);
    }

    #[test]
    fn clones_share_the_seeded_generator() {
        let a = IdempotencyTokenProvider::with_seed(7);
        let reference = IdempotencyTokenProvider::with_seed(7);
        let b = a.clone();
        a.make_idempotency_token();
        reference.make_idempotency_token();
        assert_eq!(
            b.make_idempotency_token(),
            reference.make_idempotency_token()
        );
    }

    #[test]
    fn fixed_tokens() {
        let provider = IdempotencyTokenProvider::fixed("00000000-0000-4000-8000-000000000000");
        assert_eq!(
            provider.make_idempotency_token(),
            "00000000-0000-4000-8000-000000000000"
        );
        assert_eq!(format!("{:?}", provider), "IdempotencyTokenProvider(\"Fixed\")");
    }

    fn assert_valid(uuid: String) {
        assert_eq!(uuid.len(), 36);
        let bytes = uuid.as_bytes();
        let dashes: Vec<usize> = uuid
            .chars()
            .enumerate()
            .filter_map(|(idx, chr)| if chr == '-' { Some(idx) } else { None })
            .collect();
        assert_eq!(dashes, vec![8, 13, 18, 23]);
        assert_eq!(bytes[14] as char, '4');
        assert!(matches!(bytes[19], b'8' | b'9' | b'a' | b'b'), "{}", uuid);
    }

    proptest! {
        #[test]
        fn any_input_is_a_valid_uuid(v in any::<u128>()) {
            assert_valid(uuid_v4(v));
        }
    }
}
