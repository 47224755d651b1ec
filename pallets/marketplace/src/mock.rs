use frame::{
    deps::{frame_support::weights::constants::RocksDbWeight, frame_system::GenesisConfig},
    prelude::*,
    runtime::prelude::*,
    testing_prelude::*,
};
use polkadot_sdk::pallet_balances;

// Configure a mock runtime to test the pallet.
#[frame_construct_runtime]
mod test_runtime {
    #[runtime::runtime]
    #[runtime::derive(
        RuntimeCall,
        RuntimeEvent,
        RuntimeError,
        RuntimeOrigin,
        RuntimeFreezeReason,
        RuntimeHoldReason,
        RuntimeSlashReason,
        RuntimeLockId,
        RuntimeTask,
        RuntimeViewFunction
    )]
    pub struct Test;

    #[runtime::pallet_index(0)]
    pub type System = frame_system;
    #[runtime::pallet_index(1)]
    pub type Balances = pallet_balances;
    #[runtime::pallet_index(2)]
    pub type Journal = pallet_hero_journal;
    #[runtime::pallet_index(3)]
    pub type HeroRegistry = pallet_hero_registry;
    #[runtime::pallet_index(4)]
    pub type Marketplace = crate;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Nonce = u64;
    type Block = MockBlock<Test>;
    type BlockHashCount = ConstU64<250>;
    type DbWeight = RocksDbWeight;
    type AccountData = pallet_balances::AccountData<u64>;
}

impl pallet_balances::Config for Test {
    type Balance = u64;
    type RuntimeEvent = RuntimeEvent;
    type DustRemoval = ();
    type ExistentialDeposit = ConstU64<1>;
    type AccountStore = System;
    type MaxLocks = ConstU32<50>;
    type MaxReserves = ConstU32<50>;
    type ReserveIdentifier = [u8; 8];
    type WeightInfo = ();
    type RuntimeHoldReason = RuntimeHoldReason;
    type RuntimeFreezeReason = RuntimeFreezeReason;
    type FreezeIdentifier = RuntimeFreezeReason;
    type MaxFreezes = ConstU32<0>;
    type DoneSlashHandler = ();
}

impl pallet_hero_journal::Config for Test {
    type Balance = u64;
}

impl pallet_hero_registry::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxHeroNameLen = ConstU32<64>;
    type MaxHeroUriLen = ConstU32<256>;
    type WeightInfo = ();
}

impl crate::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type WeightInfo = ();
}

/// The genesis holder of the admin capability.
pub const ADMIN: u64 = 99;

// Build genesis storage according to the mock runtime.
pub fn new_test_ext() -> TestState {
    let mut t = GenesisConfig::<Test>::default().build_storage().unwrap();

    // Fund test accounts
    pallet_balances::GenesisConfig::<Test> {
        balances: vec![(1, 10_000), (2, 10_000), (3, 10_000), (ADMIN, 10_000)],
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    crate::GenesisConfig::<Test> { admin: Some(ADMIN) }
        .assimilate_storage(&mut t)
        .unwrap();

    t.into()
}
