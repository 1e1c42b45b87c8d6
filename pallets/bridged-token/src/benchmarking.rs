//! Benchmarking setup for pallet-bridged-token
//!
//! Role holders are written straight into `RoleMembers` so each benchmark
//! measures only the call under test. `permit` is not benchmarked here: the
//! pallet cannot produce a signature for an arbitrary `SignatureRecovery`.

use super::*;

#[allow(unused)]
use crate::Pallet as BridgedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn holder<T: Config>(role: Role) -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    RoleMembers::<T>::insert(role, &caller, true);
    caller
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize() {
        Initialized::<T>::kill();
        let admin: T::AccountId = account("admin", 0, 0);
        let pauser: T::AccountId = account("pauser", 0, 0);
        let upgrader: T::AccountId = account("upgrader", 0, 0);
        let origin = T::InitializeOrigin::try_successful_origin().expect("Initialize origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, admin.clone(), pauser, upgrader);

        assert!(RoleMembers::<T>::get(Role::DefaultAdmin, &admin));
    }

    #[benchmark]
    fn grant_role() {
        let caller = holder::<T>(Role::DefaultAdmin);
        let account: T::AccountId = account("grantee", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::MinterAdmin, account.clone());

        assert!(RoleMembers::<T>::get(Role::MinterAdmin, &account));
    }

    #[benchmark]
    fn revoke_role() {
        let caller = holder::<T>(Role::DefaultAdmin);
        let account: T::AccountId = account("grantee", 0, 0);
        RoleMembers::<T>::insert(Role::MinterAdmin, &account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), Role::MinterAdmin, account.clone());

        assert!(!RoleMembers::<T>::get(Role::MinterAdmin, &account));
    }

    #[benchmark]
    fn renounce_role() {
        let caller = holder::<T>(Role::Pauser);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), Role::Pauser, caller.clone());

        assert!(!RoleMembers::<T>::get(Role::Pauser, &caller));
    }

    #[benchmark]
    fn pause() {
        let caller = holder::<T>(Role::Pauser);
        IsPaused::<T>::put(false);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(IsPaused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let caller = holder::<T>(Role::Pauser);
        IsPaused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert!(!IsPaused::<T>::get());
    }

    #[benchmark]
    fn blacklist() {
        let caller = holder::<T>(Role::Blacklister);
        let account: T::AccountId = account("target", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert!(Blacklisted::<T>::get(&account));
    }

    #[benchmark]
    fn unblacklist() {
        let caller = holder::<T>(Role::Blacklister);
        let account: T::AccountId = account("target", 0, 0);
        Blacklisted::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), account.clone());

        assert!(!Blacklisted::<T>::get(&account));
    }

    #[benchmark]
    fn configure_minter() {
        let caller = holder::<T>(Role::MinterAdmin);
        let minter: T::AccountId = account("minter", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), minter.clone(), 1_000_000);

        assert_eq!(MinterAllowances::<T>::get(&minter), Some(1_000_000));
    }

    #[benchmark]
    fn remove_minter() {
        let caller = holder::<T>(Role::MinterAdmin);
        let minter: T::AccountId = account("minter", 0, 0);
        RoleMembers::<T>::insert(Role::Minter, &minter, true);
        MinterAllowances::<T>::insert(&minter, 1_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), minter.clone());

        assert!(!RoleMembers::<T>::get(Role::Minter, &minter));
    }

    #[benchmark]
    fn mint() {
        let caller = holder::<T>(Role::Minter);
        MinterAllowances::<T>::insert(&caller, 10_000_000);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let owner: T::AccountId = account("owner", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount: u128 = 1_000_000;
        Balances::<T>::insert(&owner, 10_000_000);
        TotalSupply::<T>::put(10_000_000);
        Allowances::<T>::insert(&owner, &caller, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &caller), 0);
    }

    #[benchmark]
    fn burn() {
        // Minter role covers both burn policies
        let caller = holder::<T>(Role::Minter);
        Balances::<T>::insert(&caller, 10_000_000);
        TotalSupply::<T>::put(10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), 1_000_000);

        assert_eq!(Balances::<T>::get(&caller), 9_000_000);
    }

    impl_benchmark_test_suite!(BridgedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
