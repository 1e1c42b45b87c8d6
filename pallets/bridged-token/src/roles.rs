//! Role identifiers, the built-in admin hierarchy and role-gated origins.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{pallet_prelude::*, traits::EnsureOrigin};
use frame_system::pallet_prelude::OriginFor;
use scale_info::TypeInfo;
use sp_std::marker::PhantomData;

use crate::{Config, Pallet};

/// A named capability. Membership is stored per account in `RoleMembers`, and
/// the role that governs each role lives in `RoleAdmins`.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Encode,
    Decode,
    DecodeWithMemTracking,
    MaxEncodedLen,
    TypeInfo,
    RuntimeDebug,
    frame_support::PalletError,
)]
pub enum Role {
    /// Top-level administrator; administers itself and every `*Admin` role.
    #[default]
    DefaultAdmin,
    MinterAdmin,
    Minter,
    PauserAdmin,
    Pauser,
    UpgraderAdmin,
    Upgrader,
    BlacklisterAdmin,
    Blacklister,
}

impl Role {
    pub const ALL: [Role; 9] = [
        Role::DefaultAdmin,
        Role::MinterAdmin,
        Role::Minter,
        Role::PauserAdmin,
        Role::Pauser,
        Role::UpgraderAdmin,
        Role::Upgrader,
        Role::BlacklisterAdmin,
        Role::Blacklister,
    ];

    /// Admin role written for `self` when the ledger is initialized.
    pub const fn initial_admin(self) -> Role {
        match self {
            Role::Minter => Role::MinterAdmin,
            Role::Pauser => Role::PauserAdmin,
            Role::Upgrader => Role::UpgraderAdmin,
            Role::Blacklister => Role::BlacklisterAdmin,
            Role::DefaultAdmin
            | Role::MinterAdmin
            | Role::PauserAdmin
            | Role::UpgraderAdmin
            | Role::BlacklisterAdmin => Role::DefaultAdmin,
        }
    }
}

/// Who may burn tokens. Chosen by the runtime through `Config::BurnPolicy`.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum BurnPolicy {
    /// Any holder may burn its own balance.
    SelfService,
    /// Only accounts holding `Role::Minter` may burn, and only their own balance.
    MinterOnly,
}

/// Origin check that admits signed origins whose account holds `R::get()`.
///
/// Runtimes use `EnsureRole<Runtime, UpgraderRole>` to put the code-upgrade
/// authority behind the ledger's upgrader role.
pub struct EnsureRole<T, R>(PhantomData<(T, R)>);

impl<T: Config, R: Get<Role>> EnsureOrigin<OriginFor<T>> for EnsureRole<T, R> {
    type Success = T::AccountId;

    fn try_origin(o: OriginFor<T>) -> Result<Self::Success, OriginFor<T>> {
        let who = frame_system::EnsureSigned::<T::AccountId>::try_origin(o.clone())?;
        if Pallet::<T>::has_role(R::get(), &who) {
            Ok(who)
        } else {
            Err(o)
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<OriginFor<T>, ()> {
        let who: T::AccountId = frame_benchmarking::whitelisted_caller();
        crate::RoleMembers::<T>::insert(R::get(), &who, true);
        Ok(frame_system::RawOrigin::Signed(who).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{new_test_ext, BridgedToken, RuntimeOrigin, Test, ADMIN, UPGRADER};
    use frame_support::{assert_ok, parameter_types};

    parameter_types! {
        pub const UpgraderRole: Role = Role::Upgrader;
    }

    type EnsureUpgrader = EnsureRole<Test, UpgraderRole>;

    #[test]
    fn initial_hierarchy_routes_operational_roles_through_their_admins() {
        assert_eq!(Role::Minter.initial_admin(), Role::MinterAdmin);
        assert_eq!(Role::Blacklister.initial_admin(), Role::BlacklisterAdmin);
        assert_eq!(Role::PauserAdmin.initial_admin(), Role::DefaultAdmin);
        assert_eq!(Role::DefaultAdmin.initial_admin(), Role::DefaultAdmin);
    }

    #[test]
    fn ensure_role_admits_only_role_holders() {
        new_test_ext().execute_with(|| {
            assert_eq!(EnsureUpgrader::try_origin(RuntimeOrigin::signed(UPGRADER)).ok(), Some(UPGRADER));
            assert!(EnsureUpgrader::try_origin(RuntimeOrigin::signed(ADMIN)).is_err());
            assert!(EnsureUpgrader::try_origin(RuntimeOrigin::root()).is_err());
        });
    }

    #[test]
    fn ensure_role_follows_revocation() {
        new_test_ext().execute_with(|| {
            assert_ok!(BridgedToken::grant_role(
                RuntimeOrigin::signed(ADMIN),
                Role::UpgraderAdmin,
                ADMIN
            ));
            assert_ok!(BridgedToken::revoke_role(
                RuntimeOrigin::signed(ADMIN),
                Role::Upgrader,
                UPGRADER
            ));
            assert!(EnsureUpgrader::try_origin(RuntimeOrigin::signed(UPGRADER)).is_err());
        });
    }
}
