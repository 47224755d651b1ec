//! The hold/release surface the marketplace and arena pallets drive hero
//! ownership through.

use crate::pallet::*;
use alloc::vec::Vec;
use frame::prelude::*;
use hero_common::{HeroId, HoldReason};

impl<T: Config> Pallet<T> {
    /// Current record for a hero, if it exists.
    pub fn hero(hero_id: HeroId) -> Option<HeroRecord<T>> {
        Heroes::<T>::get(hero_id)
    }

    /// Current owner of record for a hero.
    pub fn owner_of(hero_id: HeroId) -> Option<T::AccountId> {
        Heroes::<T>::get(hero_id).map(|hero| hero.owner)
    }

    /// All heroes currently owned by `owner`.
    pub fn heroes_of(owner: &T::AccountId) -> Vec<HeroId> {
        HeroesByOwner::<T>::iter_prefix(owner)
            .map(|(hero_id, ())| hero_id)
            .collect()
    }

    /// Place a hero under a hold on behalf of `who`.
    ///
    /// The hero must exist, be owned by `who`, and carry no other hold; a
    /// single failed check leaves the record untouched.
    pub fn hold(hero_id: HeroId, who: &T::AccountId, reason: HoldReason) -> DispatchResult {
        Heroes::<T>::try_mutate(hero_id, |maybe_hero| {
            let hero = maybe_hero.as_mut().ok_or(Error::<T>::NotFound)?;
            ensure!(&hero.owner == who, Error::<T>::NotOwner);
            ensure!(hero.held.is_none(), Error::<T>::AlreadyEscrowed);
            hero.held = Some(reason);
            Ok(())
        })
    }

    /// Clear a hero's hold, optionally passing ownership to `new_owner`.
    ///
    /// The owner change covers settlement of a sale and loss of a defended
    /// arena; with `None` the hero simply returns to its owner's free
    /// possession (delist, successful defense).
    pub fn release(hero_id: HeroId, new_owner: Option<&T::AccountId>) -> DispatchResult {
        let previous = Heroes::<T>::try_mutate(hero_id, |maybe_hero| {
            let hero = maybe_hero.as_mut().ok_or(Error::<T>::NotFound)?;
            hero.held = None;
            let previous = hero.owner.clone();
            if let Some(to) = new_owner {
                hero.owner = to.clone();
            }
            Ok::<T::AccountId, DispatchError>(previous)
        })?;

        if let Some(to) = new_owner {
            if &previous != to {
                HeroesByOwner::<T>::remove(&previous, hero_id);
                HeroesByOwner::<T>::insert(to, hero_id, ());
                log::debug!(
                    target: crate::LOG_TARGET,
                    "hero {} released from escrow to new owner {:?}",
                    hero_id,
                    to,
                );
            }
        }

        Ok(())
    }

    /// Reassign ownership of an unheld hero.
    ///
    /// Used when a wagered challenger hero is lost in battle; the hero was
    /// checked free at the start of the same extrinsic.
    pub fn award(hero_id: HeroId, to: &T::AccountId) -> DispatchResult {
        let previous = Heroes::<T>::try_mutate(hero_id, |maybe_hero| {
            let hero = maybe_hero.as_mut().ok_or(Error::<T>::NotFound)?;
            ensure!(hero.held.is_none(), Error::<T>::Escrowed);
            let previous = hero.owner.clone();
            hero.owner = to.clone();
            Ok::<T::AccountId, DispatchError>(previous)
        })?;

        if &previous != to {
            HeroesByOwner::<T>::remove(&previous, hero_id);
            HeroesByOwner::<T>::insert(to, hero_id, ());
            log::debug!(
                target: crate::LOG_TARGET,
                "hero {} awarded to {:?}",
                hero_id,
                to,
            );
        }

        Ok(())
    }

    /// Check that `who` owns `hero_id` and that no hold is active, returning
    /// the record. The precondition for wagering a hero in battle.
    pub fn ensure_owned_and_free(
        hero_id: HeroId,
        who: &T::AccountId,
    ) -> Result<HeroRecord<T>, DispatchError> {
        let hero = Heroes::<T>::get(hero_id).ok_or(Error::<T>::NotFound)?;
        ensure!(&hero.owner == who, Error::<T>::NotOwner);
        ensure!(hero.held.is_none(), Error::<T>::AlreadyEscrowed);
        Ok(hero)
    }
}
