//! Benchmarking for pallet-hero-arena.
//!
//! `battle` is benchmarked on its heaviest path: a challenger victory, which
//! moves the defender out of escrow and reassigns the owner index.

use super::*;
use alloc::vec;
use alloc::vec::Vec;
use frame::{deps::frame_benchmarking::v2::*, prelude::*};

#[benchmarks]
mod benchmarks {
    use super::*;
    use frame_system::RawOrigin;

    fn mint_hero_for<T: Config>(owner: &T::AccountId, power: u32) -> hero_common::HeroId {
        let hero_id = pallet_hero_registry::NextHeroId::<T>::get();
        let name: Vec<u8> = vec![b'a'; T::MaxHeroNameLen::get() as usize];
        let uri: Vec<u8> = vec![b'a'; T::MaxHeroUriLen::get() as usize];
        pallet_hero_registry::Pallet::<T>::mint_hero(
            RawOrigin::Signed(owner.clone()).into(),
            name,
            uri,
            power,
        )
        .expect("minting with bounded attributes succeeds");
        hero_id
    }

    #[benchmark]
    fn create_arena() {
        let caller: T::AccountId = whitelisted_caller();
        let hero_id = mint_hero_for::<T>(&caller, 100);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), hero_id);

        assert!(Arenas::<T>::get(0).is_some());
    }

    #[benchmark]
    fn battle() {
        let defender_owner: T::AccountId = account("defender", 0, 0);
        let challenger_owner: T::AccountId = whitelisted_caller();
        let defender = mint_hero_for::<T>(&defender_owner, 50);
        let challenger = mint_hero_for::<T>(&challenger_owner, 100);
        Pallet::<T>::create_arena(RawOrigin::Signed(defender_owner).into(), defender)
            .expect("escrowing an owned, unheld hero succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(challenger_owner.clone()), 0, challenger);

        assert!(Arenas::<T>::get(0).is_none());
        assert_eq!(
            pallet_hero_registry::Pallet::<T>::owner_of(defender),
            Some(challenger_owner)
        );
    }
}
