use crate::pallet::*;
use alloc::vec::Vec;
use frame::prelude::*;
use frame::traits::fungible;
use hero_common::ListingId;

impl<T: Config> Pallet<T> {
    /// Check that `who` holds the admin capability.
    pub(crate) fn ensure_admin(who: &T::AccountId) -> DispatchResult {
        ensure!(
            AdminCapHolder::<T>::get().as_ref() == Some(who),
            Error::<T>::Unauthorized
        );
        Ok(())
    }

    /// Current holder of the admin capability, if it was ever issued.
    pub fn admin_cap_holder() -> Option<T::AccountId> {
        AdminCapHolder::<T>::get()
    }

    /// All currently active listings.
    pub fn active_listings() -> Vec<(ListingId, Listing<T>)> {
        Listings::<T>::iter().collect()
    }

    /// Free balance of an account in the marketplace currency.
    pub fn balance_of(who: &T::AccountId) -> BalanceOf<T> {
        <T::Currency as fungible::Inspect<T::AccountId>>::balance(who)
    }
}
