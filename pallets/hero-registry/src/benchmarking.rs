//! Benchmarking for pallet-hero-registry.
//!
//! Mints use maximum-length attributes so the recorded weights cover the
//! worst encoded size.

use super::*;
use alloc::vec;
use alloc::vec::Vec;
use frame::{deps::frame_benchmarking::v2::*, prelude::*};

#[benchmarks]
mod benchmarks {
    use super::*;
    use frame_system::RawOrigin;

    fn max_name<T: Config>() -> Vec<u8> {
        vec![b'a'; T::MaxHeroNameLen::get() as usize]
    }

    fn max_uri<T: Config>() -> Vec<u8> {
        vec![b'a'; T::MaxHeroUriLen::get() as usize]
    }

    #[benchmark]
    fn mint_hero() {
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        _(
            RawOrigin::Signed(caller.clone()),
            max_name::<T>(),
            max_uri::<T>(),
            100,
        );

        assert_eq!(Pallet::<T>::owner_of(0), Some(caller));
    }

    #[benchmark]
    fn transfer_hero() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Pallet::<T>::mint_hero(
            RawOrigin::Signed(caller.clone()).into(),
            max_name::<T>(),
            max_uri::<T>(),
            100,
        )
        .expect("minting with bounded attributes succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 0, recipient.clone());

        assert_eq!(Pallet::<T>::owner_of(0), Some(recipient));
    }
}
