use crate as pallet_bridged_token;
use crate::{BurnPolicy, Role, SignatureRecovery};
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU32, ConstU64, UnixTime},
};
use scale_info::TypeInfo;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, RuntimeDebug,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const ADMIN: u64 = 1;
pub const PAUSER: u64 = 2;
pub const UPGRADER: u64 = 3;
pub const MINTER_ADMIN: u64 = 4;
pub const MINTER: u64 = 5;
pub const BLACKLISTER_ADMIN: u64 = 6;
pub const BLACKLISTER: u64 = 7;
pub const ALICE: u64 = 10;
pub const BOB: u64 = 11;
pub const CHARLIE: u64 = 12;
pub const DEPLOYER: u64 = 99;

/// Budget given to `MINTER` by `new_test_ext_with_minter`.
pub const MINTER_ALLOWANCE: u128 = 1_000;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        BridgedToken: pallet_bridged_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

parameter_types! {
    pub const DeployerAccount: u64 = DEPLOYER;
    /// Unix seconds reported by `MockTime`.
    pub storage Now: u64 = 1_700_000_000;
    pub storage Burning: BurnPolicy = BurnPolicy::SelfService;
}

pub struct EnsureDeployer;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureDeployer {
    type Success = u64;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == DeployerAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(DeployerAccount::get()))
    }
}

pub struct MockTime;
impl UnixTime for MockTime {
    fn now() -> core::time::Duration {
        core::time::Duration::from_secs(Now::get())
    }
}

/// Test signature: claims a signer and the digest it signed. Recovery succeeds
/// only when the digest matches, mimicking a real scheme where a signature over
/// another message recovers to nobody in particular.
#[derive(
    Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct MockSignature {
    pub signer: u64,
    pub digest: [u8; 32],
}

pub struct MockRecovery;
impl SignatureRecovery<u64> for MockRecovery {
    type Signature = MockSignature;

    fn recover_signer(digest: &[u8; 32], signature: &MockSignature) -> Option<u64> {
        (signature.digest == *digest).then_some(signature.signer)
    }
}

impl pallet_bridged_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type InitializeOrigin = EnsureDeployer;
    type UnixTime = MockTime;
    type SignatureRecovery = MockRecovery;
    type BurnPolicy = Burning;
    type WeightInfo = ();
}

/// Signs a permit as `signer` over `owner`'s current nonce.
pub fn sign_permit(signer: u64, owner: u64, spender: u64, amount: u128, deadline: u64) -> MockSignature {
    let nonce = BridgedToken::nonces(&owner);
    MockSignature {
        signer,
        digest: BridgedToken::permit_digest(&owner, &spender, amount, nonce, deadline),
    }
}

fn build(default_admin: Option<u64>, pauser: Option<u64>, upgrader: Option<u64>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_bridged_token::GenesisConfig::<Test> {
        token_name: b"BridgedCamino".to_vec(),
        token_symbol: b"WCAM".to_vec(),
        default_admin,
        pauser,
        upgrader,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| System::set_block_number(1));
    ext
}

// Build genesis storage according to the mock runtime: initialized with
// ADMIN, PAUSER and UPGRADER, nothing else configured.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build(Some(ADMIN), Some(PAUSER), Some(UPGRADER))
}

/// Metadata only; `initialize` has not run.
pub fn uninitialized_ext() -> sp_io::TestExternalities {
    build(None, None, None)
}

/// `new_test_ext` plus a minter admin, a minter with `MINTER_ALLOWANCE`, and a
/// blacklister. Events from the setup are cleared.
pub fn new_test_ext_with_minter() -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        assert_ok!(BridgedToken::grant_role(RuntimeOrigin::signed(ADMIN), Role::MinterAdmin, MINTER_ADMIN));
        assert_ok!(BridgedToken::configure_minter(
            RuntimeOrigin::signed(MINTER_ADMIN),
            MINTER,
            MINTER_ALLOWANCE
        ));
        assert_ok!(BridgedToken::grant_role(
            RuntimeOrigin::signed(ADMIN),
            Role::BlacklisterAdmin,
            BLACKLISTER_ADMIN
        ));
        assert_ok!(BridgedToken::grant_role(
            RuntimeOrigin::signed(BLACKLISTER_ADMIN),
            Role::Blacklister,
            BLACKLISTER
        ));
        System::reset_events();
    });
    ext
}
