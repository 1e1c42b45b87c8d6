#![cfg_attr(not(feature = "std"), no_std)]
// Allow deprecated storage getters and pallet-level RuntimeEvent
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

//! # Bridged token pallet
//!
//! A permissioned ledger for a bridged asset. Balances and allowances follow
//! the usual fungible-token rules; every mutation is gated by:
//!
//! - a role registry whose admin hierarchy is stored as data (`RoleAdmins`),
//! - a global pause switch toggled by the pauser role,
//! - a blacklist maintained by the blacklister role,
//! - a depleting per-minter issuance allowance managed by the minter admin.
//!
//! Owners may also authorize allowances off-chain with a signed permit.
//!
//! Each call checks every precondition before its first storage write, so a
//! rejected call leaves neither state changes nor events behind.

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_std::prelude::*;

pub use pallet::*;

pub mod migrations;
pub mod permit;
pub mod roles;
pub mod weights;

pub use permit::{EcdsaRecovery, SignatureRecovery};
pub use roles::{BurnPolicy, EnsureRole, Role};
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Token decimals. Fixed for the lifetime of the ledger.
pub const DECIMALS: u8 = 18;

pub(crate) const LOG_TARGET: &str = "pallet-bridged-token";

/// Signature type accepted by `permit`.
pub type SignatureOf<T> = <<T as Config>::SignatureRecovery as SignatureRecovery<
    <T as frame_system::Config>::AccountId,
>>::Signature;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Origin allowed to run the one-shot `initialize` (the deployer, usually Root).
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Wall clock used to expire permits.
        type UnixTime: UnixTime;

        /// Recovers permit signers.
        type SignatureRecovery: SignatureRecovery<Self::AccountId>;

        /// Who may call `burn`.
        type BurnPolicy: Get<BurnPolicy>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "BridgedCamino")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "WCAM")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Total token supply
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (owner, spender)
    #[pallet::storage]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Role membership
    #[pallet::storage]
    pub type RoleMembers<T: Config> =
        StorageDoubleMap<_, Twox64Concat, Role, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Role that administers each role. Unset entries resolve to `Role::DefaultAdmin`.
    #[pallet::storage]
    pub type RoleAdmins<T> = StorageMap<_, Twox64Concat, Role, Role, ValueQuery>;

    /// Remaining issuance budget per configured minter. Every key holds `Role::Minter`.
    #[pallet::storage]
    pub type MinterAllowances<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u128, OptionQuery>;

    /// Global pause switch
    #[pallet::storage]
    pub type IsPaused<T> = StorageValue<_, bool, ValueQuery>;

    /// Accounts that may neither send nor receive
    #[pallet::storage]
    pub type Blacklisted<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Next permit nonce per owner
    #[pallet::storage]
    pub type Nonces<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u64, ValueQuery>;

    /// Set once `initialize` (or genesis initialization) has run
    #[pallet::storage]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Ledger initialized with its bootstrap role holders
        Initialized { default_admin: T::AccountId, pauser: T::AccountId, upgrader: T::AccountId },
        /// Role granted. `sender` is `None` when granted by initialization.
        RoleGranted { role: Role, account: T::AccountId, sender: Option<T::AccountId> },
        /// Role revoked or renounced
        RoleRevoked { role: Role, account: T::AccountId, sender: Option<T::AccountId> },
        /// Ledger paused
        Paused { account: T::AccountId },
        /// Ledger unpaused
        Unpaused { account: T::AccountId },
        /// Account added to the blacklist
        Blacklisted { account: T::AccountId },
        /// Account removed from the blacklist
        UnBlacklisted { account: T::AccountId },
        /// Minter allowance set
        MinterConfigured { minter: T::AccountId, allowed_amount: u128, new_minter: bool },
        /// Configured minter's allowance cleared and minter role revoked
        MinterRemoved { minter: T::AccountId },
        /// New tokens minted
        Mint { minter: T::AccountId, to: T::AccountId, amount: u128 },
        /// Tokens burned
        Burn { burner: T::AccountId, amount: u128 },
        /// Balance moved. `None` stands for the zero account (mint source, burn sink).
        Transfer { from: Option<T::AccountId>, to: Option<T::AccountId>, amount: u128 },
        /// Allowance set
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold `role`
        Unauthorized { role: Role },
        /// `renounce_role` called for an account other than the caller
        BadConfirmation,
        /// Ledger is paused
        Paused,
        AlreadyPaused,
        NotPaused,
        /// Sender, recipient, owner or spender is blacklisted
        BlacklistedAccount,
        /// Mint amount exceeds the minter's remaining allowance. The minter and
        /// the requested amount are reported on the `debug` log target.
        AmountExceedsMintAllowance,
        InsufficientBalance,
        InsufficientAllowance,
        /// Permit deadline has passed
        ExpiredAuthorization,
        /// Permit signature does not recover to the owner
        InvalidSignature,
        AlreadyInitialized,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Bootstrap the role registry. Runs once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize())]
        pub fn initialize(
            origin: OriginFor<T>,
            default_admin: T::AccountId,
            pauser: T::AccountId,
            upgrader: T::AccountId,
        ) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            Self::do_initialize(&default_admin, &pauser, &upgrader)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::grant_role())]
        pub fn grant_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Self::role_admin(role), &sender)?;
            Self::do_grant_role(role, &account, Some(&sender));
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::revoke_role())]
        pub fn revoke_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Self::role_admin(role), &sender)?;
            Self::do_revoke_role(role, &account, Some(&sender));
            Ok(())
        }

        /// Drop the caller's own membership. `account` must be the caller.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::renounce_role())]
        pub fn renounce_role(origin: OriginFor<T>, role: Role, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            ensure!(sender == account, Error::<T>::BadConfirmation);
            Self::do_revoke_role(role, &account, Some(&sender));
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Pauser, &sender)?;
            ensure!(!IsPaused::<T>::get(), Error::<T>::AlreadyPaused);

            IsPaused::<T>::put(true);
            log::info!(target: LOG_TARGET, "ledger paused by {sender:?}");
            Self::deposit_event(Event::Paused { account: sender });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Pauser, &sender)?;
            ensure!(IsPaused::<T>::get(), Error::<T>::NotPaused);

            IsPaused::<T>::put(false);
            log::info!(target: LOG_TARGET, "ledger unpaused by {sender:?}");
            Self::deposit_event(Event::Unpaused { account: sender });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::blacklist())]
        pub fn blacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Blacklister, &sender)?;
            Blacklisted::<T>::insert(&account, true);
            Self::deposit_event(Event::Blacklisted { account });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::unblacklist())]
        pub fn unblacklist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_role(Role::Blacklister, &sender)?;
            Blacklisted::<T>::remove(&account);
            Self::deposit_event(Event::UnBlacklisted { account });
            Ok(())
        }

        /// Set `minter`'s remaining issuance budget, granting the minter role if needed.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::configure_minter())]
        pub fn configure_minter(
            origin: OriginFor<T>,
            minter: T::AccountId,
            allowed_amount: u128,
        ) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_role(Role::MinterAdmin, &sender)?;

            let new_minter = !Self::has_role(Role::Minter, &minter);
            MinterAllowances::<T>::insert(&minter, allowed_amount);
            Self::do_grant_role(Role::Minter, &minter, Some(&sender));
            Self::deposit_event(Event::MinterConfigured { minter, allowed_amount, new_minter });
            Ok(())
        }

        /// Revoke the minter role, dropping its allowance. `MinterRemoved` is
        /// emitted only when `minter` had a configured allowance.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::remove_minter())]
        pub fn remove_minter(origin: OriginFor<T>, minter: T::AccountId) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_role(Role::MinterAdmin, &sender)?;

            let configured = MinterAllowances::<T>::contains_key(&minter);
            Self::do_revoke_role(Role::Minter, &minter, Some(&sender));
            if configured {
                Self::deposit_event(Event::MinterRemoved { minter });
            }
            Ok(())
        }

        /// Issue `amount` to `to`, drawing down the caller's minter allowance.
        #[pallet::call_index(10)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let minter = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_role(Role::Minter, &minter)?;
            Self::ensure_not_blacklisted(&minter)?;
            Self::ensure_not_blacklisted(&to)?;

            let allowance = MinterAllowances::<T>::get(&minter);
            let remaining = allowance.unwrap_or_default().checked_sub(amount).ok_or_else(|| {
                log::debug!(
                    target: LOG_TARGET,
                    "{minter:?} asked to mint {amount}, allowance is {allowance:?}"
                );
                Error::<T>::AmountExceedsMintAllowance
            })?;
            let supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            if allowance.is_some() {
                MinterAllowances::<T>::insert(&minter, remaining);
            }
            TotalSupply::<T>::put(supply);
            Balances::<T>::insert(&to, balance);

            Self::deposit_event(Event::Mint { minter, to: to.clone(), amount });
            Self::deposit_event(Event::Transfer { from: None, to: Some(to), amount });
            Ok(())
        }

        #[pallet::call_index(11)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&sender)?;
            Self::ensure_not_blacklisted(&to)?;
            Self::do_transfer(&sender, &to, amount)
        }

        /// Overwrite the caller's allowance for `spender`.
        #[pallet::call_index(12)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&owner)?;
            Self::ensure_not_blacklisted(&spender)?;
            Self::do_approve(owner, spender, amount);
            Ok(())
        }

        /// Move `amount` from `owner` to `to`, spending the caller's allowance.
        #[pallet::call_index(13)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            owner: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&spender)?;
            Self::ensure_not_blacklisted(&owner)?;
            Self::ensure_not_blacklisted(&to)?;

            let remaining = Allowances::<T>::get(&owner, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::do_transfer(&owner, &to, amount)?;
            Allowances::<T>::insert(&owner, &spender, remaining);
            Ok(())
        }

        /// Destroy `amount` of the caller's balance.
        #[pallet::call_index(14)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
            let burner = ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            if T::BurnPolicy::get() == BurnPolicy::MinterOnly {
                Self::ensure_role(Role::Minter, &burner)?;
            }
            Self::ensure_not_blacklisted(&burner)?;

            let balance = Balances::<T>::get(&burner)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            let supply = TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Overflow)?;

            Balances::<T>::insert(&burner, balance);
            TotalSupply::<T>::put(supply);

            Self::deposit_event(Event::Burn { burner: burner.clone(), amount });
            Self::deposit_event(Event::Transfer { from: Some(burner), to: None, amount });
            Ok(())
        }

        /// Set `owner`'s allowance for `spender` from an off-chain signature.
        ///
        /// Any signed account may relay the permit. The signature must cover the
        /// owner's current nonce, which is consumed on success.
        #[pallet::call_index(15)]
        #[pallet::weight(T::WeightInfo::permit())]
        pub fn permit(
            origin: OriginFor<T>,
            owner: T::AccountId,
            spender: T::AccountId,
            amount: u128,
            deadline: u64,
            signature: SignatureOf<T>,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            Self::ensure_not_paused()?;
            Self::ensure_not_blacklisted(&owner)?;
            Self::ensure_not_blacklisted(&spender)?;
            ensure!(T::UnixTime::now().as_secs() <= deadline, Error::<T>::ExpiredAuthorization);

            let nonce = Nonces::<T>::get(&owner);
            let next_nonce = nonce.checked_add(1).ok_or(Error::<T>::Overflow)?;
            let digest = Self::permit_digest(&owner, &spender, amount, nonce, deadline);
            let signer = <T::SignatureRecovery as SignatureRecovery<T::AccountId>>::recover_signer(
                &digest, &signature,
            );
            ensure!(signer.as_ref() == Some(&owner), Error::<T>::InvalidSignature);

            Nonces::<T>::insert(&owner, next_nonce);
            Self::do_approve(owner, spender, amount);
            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub fn decimals() -> u8 {
            DECIMALS
        }

        pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
            Allowances::<T>::get(owner, spender)
        }

        pub fn has_role(role: Role, account: &T::AccountId) -> bool {
            RoleMembers::<T>::get(role, account)
        }

        pub fn role_admin(role: Role) -> Role {
            RoleAdmins::<T>::get(role)
        }

        /// Remaining issuance budget; zero for accounts never configured.
        pub fn minter_allowance(account: &T::AccountId) -> u128 {
            MinterAllowances::<T>::get(account).unwrap_or_default()
        }

        pub fn is_minter_configured(account: &T::AccountId) -> bool {
            MinterAllowances::<T>::contains_key(account)
        }

        pub fn is_paused() -> bool {
            IsPaused::<T>::get()
        }

        pub fn is_blacklisted(account: &T::AccountId) -> bool {
            Blacklisted::<T>::get(account)
        }

        pub fn nonces(owner: &T::AccountId) -> u64 {
            Nonces::<T>::get(owner)
        }

        pub fn is_initialized() -> bool {
            Initialized::<T>::get()
        }

        pub(crate) fn do_initialize(
            default_admin: &T::AccountId,
            pauser: &T::AccountId,
            upgrader: &T::AccountId,
        ) -> DispatchResult {
            ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);

            Self::seed_role_admins();
            Self::do_grant_role(Role::DefaultAdmin, default_admin, None);
            Self::do_grant_role(Role::Pauser, pauser, None);
            Self::do_grant_role(Role::Upgrader, upgrader, None);
            TotalSupply::<T>::put(0);
            Initialized::<T>::put(true);

            log::info!(
                target: LOG_TARGET,
                "initialized: admin {default_admin:?}, pauser {pauser:?}, upgrader {upgrader:?}"
            );
            Self::deposit_event(Event::Initialized {
                default_admin: default_admin.clone(),
                pauser: pauser.clone(),
                upgrader: upgrader.clone(),
            });
            Ok(())
        }

        /// Write the built-in admin for every role that has none. Returns the
        /// number of entries written.
        pub(crate) fn seed_role_admins() -> u64 {
            let mut written = 0;
            for role in Role::ALL {
                if !RoleAdmins::<T>::contains_key(role) {
                    RoleAdmins::<T>::insert(role, role.initial_admin());
                    written += 1;
                }
            }
            written
        }

        /// Grant `role` to `account`. Holding it already is a silent no-op.
        pub(crate) fn do_grant_role(
            role: Role,
            account: &T::AccountId,
            sender: Option<&T::AccountId>,
        ) {
            if Self::has_role(role, account) {
                return;
            }
            RoleMembers::<T>::insert(role, account, true);
            Self::deposit_event(Event::RoleGranted {
                role,
                account: account.clone(),
                sender: sender.cloned(),
            });
        }

        /// Revoke `role` from `account`. Not holding it is a silent no-op.
        /// Losing `Role::Minter` also drops the minter allowance.
        pub(crate) fn do_revoke_role(
            role: Role,
            account: &T::AccountId,
            sender: Option<&T::AccountId>,
        ) {
            if !Self::has_role(role, account) {
                return;
            }
            RoleMembers::<T>::remove(role, account);
            if role == Role::Minter {
                MinterAllowances::<T>::remove(account);
            }
            Self::deposit_event(Event::RoleRevoked {
                role,
                account: account.clone(),
                sender: sender.cloned(),
            });
        }

        fn ensure_role(role: Role, account: &T::AccountId) -> DispatchResult {
            if !Self::has_role(role, account) {
                log::debug!(target: LOG_TARGET, "{account:?} lacks role {role:?}");
                return Err(Error::<T>::Unauthorized { role }.into());
            }
            Ok(())
        }

        fn ensure_not_paused() -> DispatchResult {
            ensure!(!IsPaused::<T>::get(), Error::<T>::Paused);
            Ok(())
        }

        fn ensure_not_blacklisted(account: &T::AccountId) -> DispatchResult {
            ensure!(!Blacklisted::<T>::get(account), Error::<T>::BlacklistedAccount);
            Ok(())
        }

        fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
            let from_balance = Balances::<T>::get(from)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            if from != to {
                let to_balance =
                    Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Balances::<T>::insert(from, from_balance);
                Balances::<T>::insert(to, to_balance);
            }
            Self::deposit_event(Event::Transfer {
                from: Some(from.clone()),
                to: Some(to.clone()),
                amount,
            });
            Ok(())
        }

        fn do_approve(owner: T::AccountId, spender: T::AccountId, amount: u128) {
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
        }

        /// Total supply must equal the sum of all balances, and every configured
        /// minter must hold `Role::Minter`.
        #[cfg(any(feature = "try-runtime", test))]
        pub fn do_try_state() -> Result<(), DispatchError> {
            ensure!(
                MinterAllowances::<T>::iter_keys().all(|minter| Self::has_role(Role::Minter, &minter)),
                DispatchError::Other("minter allowance held by an account without the minter role")
            );
            let sum = Balances::<T>::iter_values()
                .try_fold(0u128, |acc, balance| acc.checked_add(balance))
                .ok_or(DispatchError::Other("sum of balances overflows u128"))?;
            ensure!(
                sum == TotalSupply::<T>::get(),
                DispatchError::Other("total supply differs from the sum of balances")
            );
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Bootstrap role holders. Genesis runs `initialize` only when all three are set.
        pub default_admin: Option<T::AccountId>,
        pub pauser: Option<T::AccountId>,
        pub upgrader: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            if let (Some(admin), Some(pauser), Some(upgrader)) =
                (&self.default_admin, &self.pauser, &self.upgrader)
            {
                Pallet::<T>::do_initialize(admin, pauser, upgrader)
                    .expect("genesis storage starts uninitialized; qed");
            }
        }
    }
}
