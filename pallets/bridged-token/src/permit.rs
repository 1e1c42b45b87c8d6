//! Signed approvals: digest construction and signer recovery.
//!
//! A permit authorizes `spender` to move up to `amount` of `owner`'s balance.
//! The owner signs a 32-byte digest off-chain; anyone may submit it. The digest
//! commits to a domain separator (token name, version, genesis hash), so a
//! signature for one ledger cannot be replayed against another, and to the
//! owner's current nonce, so it can be consumed once.

use codec::{Encode, MaxEncodedLen};
use frame_support::pallet_prelude::*;
use frame_system::pallet_prelude::BlockNumberFor;
use sp_core::ecdsa;
use sp_runtime::{
    traits::{IdentifyAccount, Zero},
    AccountId32, MultiSigner,
};

use crate::{Config, Pallet, TokenName};

/// Version component of the permit domain.
pub const PERMIT_VERSION: &[u8] = b"1";

/// Prefix mixed into every permit digest.
pub const PERMIT_TAG: &[u8] = b"bridged-token/permit";

/// Recovers the account that produced a signature over a permit digest.
///
/// Implementations must be pure: the same digest and signature always yield the
/// same answer, and `None` means the signature is malformed.
pub trait SignatureRecovery<AccountId> {
    type Signature: Parameter + MaxEncodedLen;

    fn recover_signer(digest: &[u8; 32], signature: &Self::Signature) -> Option<AccountId>;
}

/// secp256k1 public-key recovery. The recovered compressed key maps to an
/// `AccountId32` the same way `MultiSigner::Ecdsa` does.
pub struct EcdsaRecovery;

impl<AccountId: From<AccountId32>> SignatureRecovery<AccountId> for EcdsaRecovery {
    type Signature = ecdsa::Signature;

    fn recover_signer(digest: &[u8; 32], signature: &Self::Signature) -> Option<AccountId> {
        let raw: &[u8] = signature.as_ref();
        let raw: [u8; 65] = raw.try_into().ok()?;
        let public = sp_io::crypto::secp256k1_ecdsa_recover_compressed(&raw, digest).ok()?;
        let signer = MultiSigner::from(ecdsa::Public::from_raw(public)).into_account();
        Some(signer.into())
    }
}

impl<T: Config> Pallet<T> {
    /// Hash identifying this ledger instance.
    pub fn domain_separator() -> [u8; 32] {
        let name = TokenName::<T>::get();
        let genesis_hash = frame_system::Pallet::<T>::block_hash(BlockNumberFor::<T>::zero());
        (&name[..], PERMIT_VERSION, genesis_hash).using_encoded(sp_io::hashing::blake2_256)
    }

    /// Digest the owner signs to authorize `spender` for `amount`.
    pub fn permit_digest(
        owner: &T::AccountId,
        spender: &T::AccountId,
        amount: u128,
        nonce: u64,
        deadline: u64,
    ) -> [u8; 32] {
        // (owner, spender, amount, nonce, deadline) in that order.
        let payload = (owner, spender, amount, nonce, deadline);
        (PERMIT_TAG, Self::domain_separator(), payload).using_encoded(sp_io::hashing::blake2_256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, BridgedToken, Test};
    use sp_core::Pair;

    fn recover(digest: &[u8; 32], signature: &ecdsa::Signature) -> Option<AccountId32> {
        <EcdsaRecovery as SignatureRecovery<AccountId32>>::recover_signer(digest, signature)
    }

    #[test]
    fn ecdsa_recovery_returns_signing_account() {
        new_test_ext().execute_with(|| {
            let pair = ecdsa::Pair::from_seed(&[7u8; 32]);
            let digest = sp_io::hashing::blake2_256(b"approve 100");
            let signature = pair.sign_prehashed(&digest);

            let expected: AccountId32 = MultiSigner::from(pair.public()).into_account();
            assert_eq!(recover(&digest, &signature), Some(expected));
        });
    }

    #[test]
    fn ecdsa_recovery_over_other_digest_yields_other_account() {
        new_test_ext().execute_with(|| {
            let pair = ecdsa::Pair::from_seed(&[7u8; 32]);
            let signature = pair.sign_prehashed(&sp_io::hashing::blake2_256(b"approve 100"));

            let expected: AccountId32 = MultiSigner::from(pair.public()).into_account();
            let other = sp_io::hashing::blake2_256(b"approve 101");
            assert_ne!(recover(&other, &signature), Some(expected));
        });
    }

    #[test]
    fn digest_commits_to_every_field() {
        new_test_ext().execute_with(|| {
            let base = BridgedToken::permit_digest(&1, &2, 100, 0, 50);
            assert_ne!(base, BridgedToken::permit_digest(&1, &3, 100, 0, 50));
            assert_ne!(base, BridgedToken::permit_digest(&1, &2, 101, 0, 50));
            assert_ne!(base, BridgedToken::permit_digest(&1, &2, 100, 1, 50));
            assert_ne!(base, BridgedToken::permit_digest(&1, &2, 100, 0, 51));
            assert_eq!(base, BridgedToken::permit_digest(&1, &2, 100, 0, 50));
        });
    }

    #[test]
    fn domain_separator_depends_on_token_name() {
        new_test_ext().execute_with(|| {
            let before = Pallet::<Test>::domain_separator();
            TokenName::<Test>::put(BoundedVec::truncate_from(b"Other".to_vec()));
            assert_ne!(before, Pallet::<Test>::domain_separator());
        });
    }
}
