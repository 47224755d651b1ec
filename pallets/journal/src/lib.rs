//! Append-only journal of committed ledger transitions.
//!
//! The registry, marketplace, and arena pallets append one entry per
//! successful write intent, inside the same transaction as the state change
//! itself. An entry is therefore visible if and only if the transition that
//! produced it committed. Entries are never mutated or removed.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[frame::pallet]
pub mod pallet {

    use alloc::vec::Vec;
    use frame::prelude::*;
    use hero_common::{LedgerEvent, LedgerEventKind};

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Monetary amount type carried in entry payloads. Pinned to the
        /// marketplace currency's balance type by the runtime.
        type Balance: Parameter + Member + Copy + MaxEncodedLen + Zero + PartialOrd;
    }

    /// A committed transition together with its position in the log.
    ///
    /// `seq` is globally monotonic, `block` is the block the transition
    /// committed in. Blocks order entries coarsely; `seq` breaks ties by
    /// emission order, so ordering by `seq` alone is the full time order.
    #[derive(Encode, Decode, TypeInfo, CloneNoBound, PartialEqNoBound, RuntimeDebugNoBound, MaxEncodedLen)]
    #[scale_info(skip_type_params(T))]
    pub struct JournalEntry<T: Config> {
        pub seq: u64,
        pub block: BlockNumberFor<T>,
        pub event: LedgerEvent<T::AccountId, T::Balance>,
    }

    /// The log itself, keyed by sequence number.
    #[pallet::storage]
    pub type Entries<T: Config> =
        StorageMap<_, Blake2_128Concat, u64, JournalEntry<T>, OptionQuery>;

    /// Sequence number the next entry will receive.
    #[pallet::storage]
    pub type NextSeq<T: Config> = StorageValue<_, u64, ValueQuery>;

    impl<T: Config> Pallet<T> {
        /// Append one entry for a transition that is about to commit.
        ///
        /// Runs inside the caller's extrinsic, so a rejected intent leaves no
        /// trace here.
        pub fn record(event: LedgerEvent<T::AccountId, T::Balance>) {
            let seq = NextSeq::<T>::get();
            let entry = JournalEntry {
                seq,
                block: frame_system::Pallet::<T>::block_number(),
                event,
            };
            Entries::<T>::insert(seq, entry);
            NextSeq::<T>::put(seq.saturating_add(1));
        }

        /// Sequence number of the most recent entry, if any.
        pub fn latest_seq() -> Option<u64> {
            NextSeq::<T>::get().checked_sub(1)
        }

        /// Read entries newest-first, optionally filtered by kind and by an
        /// inclusive block range, stopping after `limit` matches.
        pub fn entries(
            kind: Option<LedgerEventKind>,
            from_block: Option<BlockNumberFor<T>>,
            to_block: Option<BlockNumberFor<T>>,
            limit: u32,
        ) -> Vec<JournalEntry<T>> {
            let mut out = Vec::new();
            let mut seq = NextSeq::<T>::get();
            while seq > 0 && (out.len() as u32) < limit {
                seq -= 1;
                let Some(entry) = Entries::<T>::get(seq) else {
                    break;
                };
                if let Some(to) = to_block {
                    if entry.block > to {
                        continue;
                    }
                }
                if let Some(from) = from_block {
                    // Blocks only descend as we walk backwards, so once we
                    // drop below the range there is nothing left to find.
                    if entry.block < from {
                        break;
                    }
                }
                if let Some(kind) = kind {
                    if entry.event.kind() != kind {
                        continue;
                    }
                }
                out.push(entry);
            }
            out
        }
    }
}
