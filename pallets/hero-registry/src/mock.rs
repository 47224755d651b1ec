use frame::{
    deps::frame_system::GenesisConfig,
    prelude::*,
    runtime::prelude::*,
    testing_prelude::*,
};

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
    pub type Journal = pallet_hero_journal;
    #[runtime::pallet_index(2)]
    pub type HeroRegistry = crate;
}

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Block = MockBlock<Test>;
}

impl pallet_hero_journal::Config for Test {
    type Balance = u64;
}

impl crate::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxHeroNameLen = ConstU32<64>;
    type MaxHeroUriLen = ConstU32<256>;
    type WeightInfo = ();
}

pub fn new_test_ext() -> TestState {
    GenesisConfig::<Test>::default().build_storage().unwrap().into()
}
