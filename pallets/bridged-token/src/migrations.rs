//! Storage migrations for pallet-bridged-token.
//!
//! Each migration checks the on-chain storage version before touching storage,
//! so re-running it after a successful upgrade is a no-op.
//!
//! # Wiring Migrations in Runtime
//!
//! ```ignore
//! pub type Executive = frame_executive::Executive<
//!     Runtime,
//!     Block,
//!     frame_system::ChainContext<Runtime>,
//!     Runtime,
//!     AllPalletsWithSystem,
//!     pallet_bridged_token::migrations::v1::MigrateToV1<Runtime>,
//! >;
//! ```
//!
//! Test with the `try-runtime` feature: `pre_upgrade`/`post_upgrade` verify
//! the version bump and that every role has an admin afterwards.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

/// Version 0 ledgers predate the stored role hierarchy: `RoleAdmins` is empty
/// and every role resolves to `DefaultAdmin`. Version 1 writes the built-in
/// hierarchy, leaving entries that were already set untouched.
pub mod v1 {
    use super::*;

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                let written = Pallet::<T>::seed_role_admins();
                StorageVersion::new(1).put::<Pallet<T>>();

                log::info!(
                    target: LOG_TARGET,
                    "Migrated storage v0 → v1: seeded {written} role admin entries"
                );

                // One read per role plus the version check, one write per seeded
                // entry plus the version update.
                T::DbWeight::get().reads_writes(crate::Role::ALL.len() as u64 + 1, written + 1)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at v{on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();
            log::info!(
                target: LOG_TARGET,
                "Pre-upgrade: on-chain storage version is {:?}",
                on_chain_version
            );
            Ok(on_chain_version.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let pre_version: u16 = Decode::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;
            let post_version = Pallet::<T>::on_chain_storage_version();

            if pre_version < 1 {
                frame_support::ensure!(
                    post_version >= 1,
                    sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
                );
                frame_support::ensure!(
                    crate::Role::ALL.iter().all(|role| crate::RoleAdmins::<T>::contains_key(role)),
                    sp_runtime::TryRuntimeError::Other("Role without admin after v1 migration")
                );
            }
            Ok(())
        }
    }
}
