//! Hero registry: the single source of truth for hero identity, attributes,
//! and ownership.
//!
//! The marketplace and arena pallets never touch hero storage directly; they
//! go through the hold/release surface in `impls.rs`, which is what enforces
//! the one-active-escrow-per-hero invariant across the whole ledger.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

mod impls;

pub(crate) const LOG_TARGET: &str = "runtime::hero-registry";

#[frame::pallet]
pub mod pallet {

    use alloc::vec::Vec;
    use frame::prelude::*;
    use hero_common::{HeroId, HoldReason, LedgerEvent};

    use crate::weights::WeightInfo;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config + pallet_hero_journal::Config {
        /// Because this pallet emits events, it depends on the runtime's definition of an event.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum length of a hero name.
        #[pallet::constant]
        type MaxHeroNameLen: Get<u32>;

        /// Maximum length of a hero image URL.
        #[pallet::constant]
        type MaxHeroUriLen: Get<u32>;

        /// Type representing the weight of this pallet.
        type WeightInfo: WeightInfo;
    }

    /// A hero as stored on the ledger.
    #[derive(
        Encode, Decode, TypeInfo, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound, MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    pub struct HeroRecord<T: Config> {
        /// Display name. Never empty.
        pub name: BoundedVec<u8, T::MaxHeroNameLen>,
        /// Artwork URL. Stored verbatim, never dereferenced on-chain.
        pub image_url: BoundedVec<u8, T::MaxHeroUriLen>,
        /// Power rating. Always positive.
        pub power: u32,
        /// Current owner of record. Stays put while the hero is held.
        pub owner: T::AccountId,
        /// Active escrow hold, if any. `Some` blocks direct transfer.
        pub held: Option<HoldReason>,
    }

    /// Map of all heroes ever minted.
    #[pallet::storage]
    pub type Heroes<T: Config> =
        StorageMap<_, Blake2_128Concat, HeroId, HeroRecord<T>, OptionQuery>;

    /// Next available hero id.
    #[pallet::storage]
    pub type NextHeroId<T: Config> = StorageValue<_, HeroId, ValueQuery>;

    /// Owner index so by-owner reads are a prefix iteration, not a scan.
    #[pallet::storage]
    pub type HeroesByOwner<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat, T::AccountId,
        Blake2_128Concat, HeroId,
        (),
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new hero has been minted.
        HeroMinted {
            hero_id: HeroId,
            owner: T::AccountId,
            power: u32,
        },
        /// A hero changed hands by direct transfer.
        HeroTransferred {
            hero_id: HeroId,
            from: T::AccountId,
            to: T::AccountId,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Hero attributes failed validation: empty name or image URL,
        /// over-long field, or zero power.
        InvalidInput,
        /// The hero does not exist.
        NotFound,
        /// The caller does not own the hero.
        NotOwner,
        /// The hero is held by the marketplace or an arena and cannot be
        /// transferred by its owner.
        Escrowed,
        /// The hero already has an active listing or arena.
        AlreadyEscrowed,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Mint a new hero owned by the caller.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint_hero())]
        pub fn mint_hero(
            origin: OriginFor<T>,
            name: Vec<u8>,
            image_url: Vec<u8>,
            power: u32,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            ensure!(
                !name.is_empty() && !image_url.is_empty() && power > 0,
                Error::<T>::InvalidInput
            );
            let name: BoundedVec<u8, T::MaxHeroNameLen> =
                name.try_into().map_err(|_| Error::<T>::InvalidInput)?;
            let image_url: BoundedVec<u8, T::MaxHeroUriLen> =
                image_url.try_into().map_err(|_| Error::<T>::InvalidInput)?;

            let hero_id = NextHeroId::<T>::get();

            Heroes::<T>::insert(
                hero_id,
                HeroRecord::<T> {
                    name,
                    image_url,
                    power,
                    owner: who.clone(),
                    held: None,
                },
            );
            HeroesByOwner::<T>::insert(&who, hero_id, ());
            NextHeroId::<T>::put(hero_id.saturating_add(1));

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::HeroCreated {
                hero_id,
                owner: who.clone(),
                power,
            });
            Self::deposit_event(Event::HeroMinted {
                hero_id,
                owner: who,
                power,
            });

            Ok(())
        }

        /// Transfer a hero the caller owns to another account.
        ///
        /// Fails while the hero is held by a listing or an arena; escrowed
        /// heroes only change hands through `buy_hero` or `battle`.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_hero())]
        pub fn transfer_hero(
            origin: OriginFor<T>,
            hero_id: HeroId,
            to: T::AccountId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            Heroes::<T>::try_mutate(hero_id, |maybe_hero| -> DispatchResult {
                let hero = maybe_hero.as_mut().ok_or(Error::<T>::NotFound)?;
                ensure!(hero.owner == who, Error::<T>::NotOwner);
                ensure!(hero.held.is_none(), Error::<T>::Escrowed);
                hero.owner = to.clone();
                Ok(())
            })?;

            HeroesByOwner::<T>::remove(&who, hero_id);
            HeroesByOwner::<T>::insert(&to, hero_id, ());

            Self::deposit_event(Event::HeroTransferred { hero_id, from: who, to });

            Ok(())
        }
    }
}
