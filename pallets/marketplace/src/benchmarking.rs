//! Benchmarking for pallet-hero-marketplace.

use super::*;
use alloc::vec;
use alloc::vec::Vec;
use frame::deps::sp_runtime::traits::SaturatedConversion;
use frame::{deps::frame_benchmarking::v2::*, prelude::*};

#[benchmarks]
mod benchmarks {
    use super::*;
    use frame::traits::fungible;
    use frame_system::RawOrigin;

    fn benchmark_balance<T: Config>() -> BalanceOf<T> {
        1_000_000u128.saturated_into()
    }

    fn benchmark_price<T: Config>() -> BalanceOf<T> {
        1_000u128.saturated_into()
    }

    fn funded_account<T: Config>(name: &'static str) -> T::AccountId {
        let who: T::AccountId = account(name, 0, 0);
        <T::Currency as fungible::Mutate<T::AccountId>>::set_balance(&who, benchmark_balance::<T>());
        who
    }

    fn mint_hero_for<T: Config>(owner: &T::AccountId) -> hero_common::HeroId {
        let hero_id = pallet_hero_registry::NextHeroId::<T>::get();
        let name: Vec<u8> = vec![b'a'; T::MaxHeroNameLen::get() as usize];
        let uri: Vec<u8> = vec![b'a'; T::MaxHeroUriLen::get() as usize];
        pallet_hero_registry::Pallet::<T>::mint_hero(
            RawOrigin::Signed(owner.clone()).into(),
            name,
            uri,
            100,
        )
        .expect("minting with bounded attributes succeeds");
        hero_id
    }

    #[benchmark]
    fn list_hero() {
        let caller = funded_account::<T>("seller");
        let hero_id = mint_hero_for::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), hero_id, benchmark_price::<T>());

        assert!(Listings::<T>::get(0).is_some());
    }

    #[benchmark]
    fn buy_hero() {
        let seller = funded_account::<T>("seller");
        let buyer = funded_account::<T>("buyer");
        let hero_id = mint_hero_for::<T>(&seller);
        Pallet::<T>::list_hero(
            RawOrigin::Signed(seller).into(),
            hero_id,
            benchmark_price::<T>(),
        )
        .expect("listing an owned, unheld hero succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(buyer.clone()), 0, benchmark_price::<T>());

        assert_eq!(pallet_hero_registry::Pallet::<T>::owner_of(hero_id), Some(buyer));
    }

    #[benchmark]
    fn delist_hero() {
        let admin = funded_account::<T>("admin");
        AdminCapHolder::<T>::put(&admin);
        let seller = funded_account::<T>("seller");
        let hero_id = mint_hero_for::<T>(&seller);
        Pallet::<T>::list_hero(
            RawOrigin::Signed(seller).into(),
            hero_id,
            benchmark_price::<T>(),
        )
        .expect("listing an owned, unheld hero succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), 0);

        assert!(Listings::<T>::get(0).is_none());
    }

    #[benchmark]
    fn change_price() {
        let admin = funded_account::<T>("admin");
        AdminCapHolder::<T>::put(&admin);
        let seller = funded_account::<T>("seller");
        let hero_id = mint_hero_for::<T>(&seller);
        Pallet::<T>::list_hero(
            RawOrigin::Signed(seller).into(),
            hero_id,
            benchmark_price::<T>(),
        )
        .expect("listing an owned, unheld hero succeeds");

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), 0, benchmark_balance::<T>());

        assert_eq!(Listings::<T>::get(0).unwrap().price, benchmark_balance::<T>());
    }

    #[benchmark]
    fn transfer_admin() {
        let admin = funded_account::<T>("admin");
        AdminCapHolder::<T>::put(&admin);
        let successor: T::AccountId = account("successor", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), successor.clone());

        assert_eq!(AdminCapHolder::<T>::get(), Some(successor));
    }
}
