//! Hero arenas: standing challenges resolved by one deterministic battle.
//!
//! Creating an arena escrows the owner's hero as its defender. The first
//! battle against it is terminal: the arena is removed whatever the outcome,
//! and the loser's hero changes owners with no cancellation path. Arena
//! removal, the ownership change, and the journal entry commit as one
//! transition, and a duplicate submission of the same battle finds no arena
//! and fails.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

pub(crate) const LOG_TARGET: &str = "runtime::hero-arena";

#[frame::pallet]
pub mod pallet {

    use alloc::vec::Vec;
    use frame::prelude::*;
    use hero_common::{resolve_duel, ArenaId, DuelOutcome, HeroId, HoldReason, LedgerEvent};

    use crate::weights::WeightInfo;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config + pallet_hero_registry::Config {
        /// Because this pallet emits events, it depends on the runtime's definition of an event.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Type representing the weight of this pallet.
        type WeightInfo: WeightInfo;
    }

    /// An open arena awaiting a challenger.
    #[derive(
        Encode, Decode, TypeInfo, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound, MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    pub struct Arena<T: Config> {
        /// The defending hero, escrowed for the arena's lifetime.
        pub warrior: HeroId,
        /// Account that created the arena.
        pub owner: T::AccountId,
    }

    /// Map of open arenas. An arena is removed the moment it resolves.
    #[pallet::storage]
    pub type Arenas<T: Config> = StorageMap<_, Blake2_128Concat, ArenaId, Arena<T>, OptionQuery>;

    /// Next available arena id.
    #[pallet::storage]
    pub type NextArenaId<T: Config> = StorageValue<_, ArenaId, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A new arena has opened.
        ArenaCreated {
            arena_id: ArenaId,
            hero_id: HeroId,
            owner: T::AccountId,
        },
        /// An arena has been resolved.
        ArenaCompleted {
            arena_id: ArenaId,
            winner_hero: HeroId,
            loser_hero: HeroId,
            winner: T::AccountId,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The arena does not exist or was already resolved.
        NotFound,
        /// The challenger already owns the defending hero.
        SelfChallenge,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Open an arena defended by a hero the caller owns.
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::create_arena())]
        pub fn create_arena(origin: OriginFor<T>, hero_id: HeroId) -> DispatchResult {
            let who = ensure_signed(origin)?;

            pallet_hero_registry::Pallet::<T>::hold(hero_id, &who, HoldReason::Defending)?;

            let arena_id = NextArenaId::<T>::get();
            Arenas::<T>::insert(
                arena_id,
                Arena::<T> {
                    warrior: hero_id,
                    owner: who.clone(),
                },
            );
            NextArenaId::<T>::put(arena_id.saturating_add(1));

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::ArenaCreated {
                arena_id,
                hero_id,
                owner: who.clone(),
            });
            Self::deposit_event(Event::ArenaCreated {
                arena_id,
                hero_id,
                owner: who,
            });

            Ok(())
        }

        /// Challenge an open arena with a hero the caller owns.
        ///
        /// The wagered hero must be free of holds: a listed or defending hero
        /// could otherwise change owners out from under its escrow. The hero
        /// with strictly greater power wins; ties go to the defender. The
        /// loser's hero is reassigned to the winner's account and the arena is
        /// removed, win or lose.
        #[pallet::call_index(1)]
        #[pallet::weight(<T as Config>::WeightInfo::battle())]
        pub fn battle(
            origin: OriginFor<T>,
            arena_id: ArenaId,
            challenger_hero_id: HeroId,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let arena = Arenas::<T>::get(arena_id).ok_or(Error::<T>::NotFound)?;
            let challenger =
                pallet_hero_registry::Pallet::<T>::ensure_owned_and_free(challenger_hero_id, &who)?;
            let defender = pallet_hero_registry::Pallet::<T>::hero(arena.warrior)
                .ok_or(Error::<T>::NotFound)?;
            ensure!(defender.owner != who, Error::<T>::SelfChallenge);

            let (winner_hero, loser_hero, winner) =
                match resolve_duel(challenger.power, defender.power) {
                    DuelOutcome::ChallengerWins => {
                        // The defender's hero leaves escrow straight into the
                        // challenger's possession.
                        pallet_hero_registry::Pallet::<T>::release(arena.warrior, Some(&who))?;
                        (challenger_hero_id, arena.warrior, who.clone())
                    }
                    DuelOutcome::DefenderWins => {
                        pallet_hero_registry::Pallet::<T>::release(arena.warrior, None)?;
                        pallet_hero_registry::Pallet::<T>::award(
                            challenger_hero_id,
                            &defender.owner,
                        )?;
                        (arena.warrior, challenger_hero_id, defender.owner)
                    }
                };

            Arenas::<T>::remove(arena_id);

            log::debug!(
                target: crate::LOG_TARGET,
                "arena {} resolved: hero {} defeated hero {}",
                arena_id,
                winner_hero,
                loser_hero,
            );

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::ArenaCompleted {
                arena_id,
                winner_hero,
                loser_hero,
                winner: winner.clone(),
            });
            Self::deposit_event(Event::ArenaCompleted {
                arena_id,
                winner_hero,
                loser_hero,
                winner,
            });

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// All currently open arenas.
        pub fn active_arenas() -> Vec<(ArenaId, Arena<T>)> {
            Arenas::<T>::iter().collect()
        }
    }
}
