use crate::{mock::*, Error, Listings, NextListingId};
use frame::testing_prelude::*;
use hero_common::{HoldReason, LedgerEvent, LedgerEventKind};
use pallet_hero_registry::Error as RegistryError;

fn mint(owner: u64, power: u32) -> u64 {
	let hero_id = pallet_hero_registry::NextHeroId::<Test>::get();
	assert_ok!(HeroRegistry::mint_hero(
		RuntimeOrigin::signed(owner),
		b"Fire Dragon".to_vec(),
		b"https://img.example/dragon.png".to_vec(),
		power
	));
	hero_id
}

#[test]
fn list_hero_escrows_and_journals() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);

		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		let listing = Listings::<Test>::get(0).unwrap();
		assert_eq!(listing.hero_id, hero_id);
		assert_eq!(listing.seller, 1);
		assert_eq!(listing.price, 250);
		assert_eq!(NextListingId::<Test>::get(), 1);

		// Owner of record is unchanged, but the hero is no longer transferable.
		assert_eq!(HeroRegistry::owner_of(hero_id), Some(1));
		assert_noop!(
			HeroRegistry::transfer_hero(RuntimeOrigin::signed(1), hero_id, 2),
			RegistryError::<Test>::Escrowed
		);

		let entries = Journal::entries(Some(LedgerEventKind::HeroListed), None, None, 10);
		assert_eq!(entries.len(), 1);
		assert_eq!(
			entries[0].event,
			LedgerEvent::HeroListed {
				listing_id: 0,
				hero_id,
				seller: 1,
				price: 250
			}
		);
	});
}

#[test]
fn list_hero_rejects_bad_intents() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);

		assert_noop!(
			Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 0),
			Error::<Test>::InvalidInput
		);
		assert_noop!(
			Marketplace::list_hero(RuntimeOrigin::signed(2), hero_id, 10),
			RegistryError::<Test>::NotOwner
		);
		assert_noop!(
			Marketplace::list_hero(RuntimeOrigin::signed(1), 42, 10),
			RegistryError::<Test>::NotFound
		);

		// A hero already on the market cannot be listed twice.
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 10));
		assert_noop!(
			Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 20),
			RegistryError::<Test>::AlreadyEscrowed
		);

		// Nor one standing as an arena defender.
		let defender = mint(1, 100);
		assert_ok!(HeroRegistry::hold(defender, &1, HoldReason::Defending));
		assert_noop!(
			Marketplace::list_hero(RuntimeOrigin::signed(1), defender, 10),
			RegistryError::<Test>::AlreadyEscrowed
		);
	});
}

#[test]
fn buy_hero_settles_atomically() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		assert_ok!(Marketplace::buy_hero(RuntimeOrigin::signed(2), 0, 250));

		// Hero to the buyer, exactly the price to the seller, listing gone.
		assert_eq!(HeroRegistry::owner_of(hero_id), Some(2));
		assert_eq!(Balances::free_balance(1), 10_250);
		assert_eq!(Balances::free_balance(2), 9_750);
		assert!(Listings::<Test>::get(0).is_none());
		assert!(Marketplace::active_listings().is_empty());

		// The spoils are immediately transferable.
		assert_ok!(HeroRegistry::transfer_hero(RuntimeOrigin::signed(2), hero_id, 3));

		let entries = Journal::entries(Some(LedgerEventKind::HeroBought), None, None, 10);
		assert_eq!(entries.len(), 1);
		assert_eq!(
			entries[0].event,
			LedgerEvent::HeroBought {
				listing_id: 0,
				hero_id,
				seller: 1,
				buyer: 2,
				price: 250
			}
		);
	});
}

#[test]
fn buy_hero_charges_the_asking_price_not_the_offer() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		// Overpaying moves only the asking price.
		assert_ok!(Marketplace::buy_hero(RuntimeOrigin::signed(2), 0, 1_000));
		assert_eq!(Balances::free_balance(1), 10_250);
		assert_eq!(Balances::free_balance(2), 9_750);
	});
}

#[test]
fn buy_hero_rejects_short_payment_and_dead_listings() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		assert_noop!(
			Marketplace::buy_hero(RuntimeOrigin::signed(2), 0, 249),
			Error::<Test>::InsufficientPayment
		);
		assert_noop!(
			Marketplace::buy_hero(RuntimeOrigin::signed(2), 7, 250),
			Error::<Test>::NotFound
		);

		// The first buyer to commit wins; a rerun of the same intent finds
		// nothing to settle.
		assert_ok!(Marketplace::buy_hero(RuntimeOrigin::signed(2), 0, 250));
		assert_noop!(
			Marketplace::buy_hero(RuntimeOrigin::signed(3), 0, 250),
			Error::<Test>::NotFound
		);
	});
}

#[test]
fn delist_hero_is_admin_gated_and_restores_the_seller() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		// Neither the seller nor a bystander may delist.
		assert_noop!(
			Marketplace::delist_hero(RuntimeOrigin::signed(1), 0),
			Error::<Test>::Unauthorized
		);
		assert_noop!(
			Marketplace::delist_hero(RuntimeOrigin::signed(2), 0),
			Error::<Test>::Unauthorized
		);

		assert_ok!(Marketplace::delist_hero(RuntimeOrigin::signed(ADMIN), 0));

		// Round trip: the hero is back with the seller, unescrowed, with no
		// residual listing.
		assert_eq!(HeroRegistry::owner_of(hero_id), Some(1));
		assert!(Listings::<Test>::get(0).is_none());
		assert_ok!(HeroRegistry::transfer_hero(RuntimeOrigin::signed(1), hero_id, 2));

		assert_noop!(
			Marketplace::delist_hero(RuntimeOrigin::signed(ADMIN), 0),
			Error::<Test>::NotFound
		);

		let entries = Journal::entries(Some(LedgerEventKind::HeroDelisted), None, None, 10);
		assert_eq!(entries.len(), 1);
	});
}

#[test]
fn change_price_is_admin_gated() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		assert_noop!(
			Marketplace::change_price(RuntimeOrigin::signed(1), 0, 300),
			Error::<Test>::Unauthorized
		);
		assert_noop!(
			Marketplace::change_price(RuntimeOrigin::signed(ADMIN), 0, 0),
			Error::<Test>::InvalidInput
		);
		assert_noop!(
			Marketplace::change_price(RuntimeOrigin::signed(ADMIN), 9, 300),
			Error::<Test>::NotFound
		);

		assert_ok!(Marketplace::change_price(RuntimeOrigin::signed(ADMIN), 0, 300));
		assert_eq!(Listings::<Test>::get(0).unwrap().price, 300);

		let entries = Journal::entries(Some(LedgerEventKind::PriceChanged), None, None, 10);
		assert_eq!(entries.len(), 1);
		assert_eq!(
			entries[0].event,
			LedgerEvent::PriceChanged {
				listing_id: 0,
				old_price: 250,
				new_price: 300
			}
		);

		// Buying settles at the new price.
		assert_ok!(Marketplace::buy_hero(RuntimeOrigin::signed(2), 0, 300));
		assert_eq!(Balances::free_balance(1), 10_300);
	});
}

#[test]
fn admin_handover_takes_effect_immediately() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 100);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 250));

		assert_noop!(
			Marketplace::transfer_admin(RuntimeOrigin::signed(1), 1),
			Error::<Test>::Unauthorized
		);

		assert_ok!(Marketplace::transfer_admin(RuntimeOrigin::signed(ADMIN), 2));
		assert_eq!(Marketplace::admin_cap_holder(), Some(2));

		// The previous holder lost its rights the moment the capability moved.
		assert_noop!(
			Marketplace::delist_hero(RuntimeOrigin::signed(ADMIN), 0),
			Error::<Test>::Unauthorized
		);
		assert_ok!(Marketplace::change_price(RuntimeOrigin::signed(2), 0, 500));
		assert_ok!(Marketplace::delist_hero(RuntimeOrigin::signed(2), 0));

		let entries = Journal::entries(Some(LedgerEventKind::AdminTransferred), None, None, 10);
		assert_eq!(entries.len(), 1);
		assert_eq!(
			entries[0].event,
			LedgerEvent::AdminTransferred { from: ADMIN, to: 2 }
		);
	});
}

#[test]
fn mint_list_buy_roundtrip() {
	new_test_ext().execute_with(|| {
		let hero_id = mint(1, 50);
		assert_ok!(Marketplace::list_hero(RuntimeOrigin::signed(1), hero_id, 10));
		assert_ok!(Marketplace::buy_hero(RuntimeOrigin::signed(3), 0, 10));

		assert!(Marketplace::active_listings().is_empty());
		assert_eq!(HeroRegistry::owner_of(hero_id), Some(3));
		assert_eq!(HeroRegistry::heroes_of(&3), vec![hero_id]);
		assert_eq!(Marketplace::balance_of(&1), 10_010);
	});
}
