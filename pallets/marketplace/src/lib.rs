//! Hero marketplace: listings escrow and the admin capability.
//!
//! Listing a hero moves it under a marketplace hold in the registry; buying
//! settles payment and ownership atomically in one extrinsic. Moderation
//! (delisting, repricing) is gated on a single movable admin credential
//! rather than per-listing seller control.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;

#[cfg(test)]
mod tests;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

mod impls;

pub(crate) const LOG_TARGET: &str = "runtime::hero-marketplace";

#[frame::pallet]
pub mod pallet {

    use frame::prelude::*;
    use frame::traits::{fungible, tokens::Preservation};
    use hero_common::{HeroId, HoldReason, LedgerEvent, ListingId};

    use crate::weights::WeightInfo;

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config + pallet_hero_registry::Config {
        /// Because this pallet emits events, it depends on the runtime's definition of an event.
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Currency heroes are bought and sold in. Its balance type is pinned
        /// to the journal's so sale prices land in journal entries unchanged.
        type Currency: fungible::Inspect<
                Self::AccountId,
                Balance = <Self as pallet_hero_journal::Config>::Balance,
            > + fungible::Mutate<Self::AccountId>;

        /// Type representing the weight of this pallet.
        type WeightInfo: WeightInfo;
    }

    /// Type alias for the balance type from the configured Currency.
    pub type BalanceOf<T> = <<T as Config>::Currency as fungible::Inspect<
        <T as frame_system::Config>::AccountId,
    >>::Balance;

    /// An active listing. Destroyed on buy and delist, never mutated except
    /// for admin repricing.
    #[derive(
        Encode, Decode, TypeInfo, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound, MaxEncodedLen,
    )]
    #[scale_info(skip_type_params(T))]
    pub struct Listing<T: Config> {
        /// The escrowed hero.
        pub hero_id: HeroId,
        /// Account that owned the hero at listing time; receives the proceeds.
        pub seller: T::AccountId,
        /// Asking price in the smallest currency unit. Always positive.
        pub price: BalanceOf<T>,
    }

    /// Map of active listings.
    #[pallet::storage]
    pub type Listings<T: Config> =
        StorageMap<_, Blake2_128Concat, ListingId, Listing<T>, OptionQuery>;

    /// Next available listing id.
    #[pallet::storage]
    pub type NextListingId<T: Config> = StorageValue<_, ListingId, ValueQuery>;

    /// Current holder of the admin capability.
    ///
    /// A single movable credential, not a role flag: gated calls compare the
    /// signer against this one cell. Seeded at genesis; `None` means the
    /// capability was never issued and moderation calls always fail.
    #[pallet::storage]
    pub type AdminCapHolder<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// A hero has been listed for sale.
        HeroListed {
            listing_id: ListingId,
            hero_id: HeroId,
            seller: T::AccountId,
            price: BalanceOf<T>,
        },
        /// A listing has been settled.
        HeroBought {
            listing_id: ListingId,
            hero_id: HeroId,
            seller: T::AccountId,
            buyer: T::AccountId,
            price: BalanceOf<T>,
        },
        /// An admin took a listing down.
        HeroDelisted {
            listing_id: ListingId,
            hero_id: HeroId,
            seller: T::AccountId,
        },
        /// An admin repriced a listing.
        PriceChanged {
            listing_id: ListingId,
            old_price: BalanceOf<T>,
            new_price: BalanceOf<T>,
        },
        /// The admin capability moved to a new holder.
        AdminTransferred {
            from: T::AccountId,
            to: T::AccountId,
        },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The price is zero.
        InvalidInput,
        /// The listing does not exist or was already settled.
        NotFound,
        /// The caller does not hold the admin capability.
        Unauthorized,
        /// The offered payment does not cover the asking price.
        InsufficientPayment,
    }

    #[pallet::genesis_config]
    #[derive(frame::prelude::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial holder of the admin capability.
        pub admin: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(admin) = &self.admin {
                AdminCapHolder::<T>::put(admin);
            }
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// List a hero the caller owns at a fixed asking price.
        ///
        /// The hero moves under a marketplace hold: its owner of record is
        /// unchanged but direct transfer is blocked until the listing is
        /// settled or taken down.
        #[pallet::call_index(0)]
        #[pallet::weight(<T as Config>::WeightInfo::list_hero())]
        pub fn list_hero(
            origin: OriginFor<T>,
            hero_id: HeroId,
            price: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            ensure!(!price.is_zero(), Error::<T>::InvalidInput);

            pallet_hero_registry::Pallet::<T>::hold(hero_id, &who, HoldReason::Listed)?;

            let listing_id = NextListingId::<T>::get();
            Listings::<T>::insert(
                listing_id,
                Listing::<T> {
                    hero_id,
                    seller: who.clone(),
                    price,
                },
            );
            NextListingId::<T>::put(listing_id.saturating_add(1));

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::HeroListed {
                listing_id,
                hero_id,
                seller: who.clone(),
                price,
            });
            Self::deposit_event(Event::HeroListed {
                listing_id,
                hero_id,
                seller: who,
                price,
            });

            Ok(())
        }

        /// Buy a listed hero.
        ///
        /// `payment` must cover the asking price; exactly the asking price
        /// moves from buyer to seller. Payment, ownership handover, and
        /// listing removal commit together or not at all.
        #[pallet::call_index(1)]
        #[pallet::weight(<T as Config>::WeightInfo::buy_hero())]
        pub fn buy_hero(
            origin: OriginFor<T>,
            listing_id: ListingId,
            payment: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;

            let listing = Listings::<T>::get(listing_id).ok_or(Error::<T>::NotFound)?;
            ensure!(payment >= listing.price, Error::<T>::InsufficientPayment);

            <T::Currency as fungible::Mutate<T::AccountId>>::transfer(
                &who,
                &listing.seller,
                listing.price,
                Preservation::Expendable,
            )?;
            pallet_hero_registry::Pallet::<T>::release(listing.hero_id, Some(&who))?;
            Listings::<T>::remove(listing_id);

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::HeroBought {
                listing_id,
                hero_id: listing.hero_id,
                seller: listing.seller.clone(),
                buyer: who.clone(),
                price: listing.price,
            });
            Self::deposit_event(Event::HeroBought {
                listing_id,
                hero_id: listing.hero_id,
                seller: listing.seller,
                buyer: who,
                price: listing.price,
            });

            Ok(())
        }

        /// Take a listing down. Admin only; the hero returns to its seller,
        /// free to transfer again.
        #[pallet::call_index(2)]
        #[pallet::weight(<T as Config>::WeightInfo::delist_hero())]
        pub fn delist_hero(origin: OriginFor<T>, listing_id: ListingId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;

            let listing = Listings::<T>::get(listing_id).ok_or(Error::<T>::NotFound)?;

            pallet_hero_registry::Pallet::<T>::release(listing.hero_id, None)?;
            Listings::<T>::remove(listing_id);

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::HeroDelisted {
                listing_id,
                hero_id: listing.hero_id,
                seller: listing.seller.clone(),
            });
            Self::deposit_event(Event::HeroDelisted {
                listing_id,
                hero_id: listing.hero_id,
                seller: listing.seller,
            });

            Ok(())
        }

        /// Reprice a listing. Admin only.
        #[pallet::call_index(3)]
        #[pallet::weight(<T as Config>::WeightInfo::change_price())]
        pub fn change_price(
            origin: OriginFor<T>,
            listing_id: ListingId,
            new_price: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;

            ensure!(!new_price.is_zero(), Error::<T>::InvalidInput);

            let old_price = Listings::<T>::try_mutate(listing_id, |maybe_listing| {
                let listing = maybe_listing.as_mut().ok_or(Error::<T>::NotFound)?;
                let old_price = listing.price;
                listing.price = new_price;
                Ok::<BalanceOf<T>, DispatchError>(old_price)
            })?;

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::PriceChanged {
                listing_id,
                old_price,
                new_price,
            });
            Self::deposit_event(Event::PriceChanged {
                listing_id,
                old_price,
                new_price,
            });

            Ok(())
        }

        /// Hand the admin capability to another account.
        ///
        /// Unconditional beyond the holder check: `to` is not validated, and
        /// a transfer to an unrecoverable account permanently loses the
        /// capability.
        #[pallet::call_index(4)]
        #[pallet::weight(<T as Config>::WeightInfo::transfer_admin())]
        pub fn transfer_admin(origin: OriginFor<T>, to: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_admin(&who)?;

            AdminCapHolder::<T>::put(&to);
            log::info!(
                target: crate::LOG_TARGET,
                "admin capability handed from {:?} to {:?}",
                who,
                to,
            );

            pallet_hero_journal::Pallet::<T>::record(LedgerEvent::AdminTransferred {
                from: who.clone(),
                to: to.clone(),
            });
            Self::deposit_event(Event::AdminTransferred { from: who, to });

            Ok(())
        }
    }
}
