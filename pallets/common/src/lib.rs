//! Shared vocabulary of the hero ledger pallets.
//!
//! Everything here is no_std compatible and SCALE-encodable so the pallets
//! can put it straight into runtime storage.

#![cfg_attr(not(feature = "std"), no_std)]

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// Unique identifier for heroes. Allocated from a counter, never reused.
pub type HeroId = u64;

/// Unique identifier for marketplace listings.
pub type ListingId = u64;

/// Unique identifier for arenas.
pub type ArenaId = u64;

/// Why a hero is held in escrow.
///
/// A hero carries at most one hold at a time; while held it cannot be
/// transferred by its owner, listed again, or staked in another arena.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum HoldReason {
    /// Held by the marketplace while an active listing references the hero.
    Listed,
    /// Held by the arena ledger while the hero defends an open arena.
    Defending,
}

/// Outcome of a duel between a challenger and a defending hero.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum DuelOutcome {
    ChallengerWins,
    DefenderWins,
}

/// Resolve a duel from the two heroes' power ratings.
///
/// The challenger must strictly out-power the defender; ties go to the
/// defender, who staked first and bears the escrow.
pub fn resolve_duel(challenger_power: u32, defender_power: u32) -> DuelOutcome {
    if challenger_power > defender_power {
        DuelOutcome::ChallengerWins
    } else {
        DuelOutcome::DefenderWins
    }
}

/// One committed state transition, as recorded in the journal.
///
/// Payloads carry the ids, accounts, and prices an observer needs to follow
/// the ledger without replaying storage.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen)]
pub enum LedgerEvent<AccountId, Balance> {
    /// A new hero was minted.
    HeroCreated {
        hero_id: HeroId,
        owner: AccountId,
        power: u32,
    },
    /// A hero was put up for sale.
    HeroListed {
        listing_id: ListingId,
        hero_id: HeroId,
        seller: AccountId,
        price: Balance,
    },
    /// A listing was settled: payment to the seller, hero to the buyer.
    HeroBought {
        listing_id: ListingId,
        hero_id: HeroId,
        seller: AccountId,
        buyer: AccountId,
        price: Balance,
    },
    /// An admin took a listing down; the hero returned to its seller.
    HeroDelisted {
        listing_id: ListingId,
        hero_id: HeroId,
        seller: AccountId,
    },
    /// An admin repriced a listing.
    PriceChanged {
        listing_id: ListingId,
        old_price: Balance,
        new_price: Balance,
    },
    /// A hero was staked as the defender of a fresh arena.
    ArenaCreated {
        arena_id: ArenaId,
        hero_id: HeroId,
        owner: AccountId,
    },
    /// An arena was resolved; the loser's hero now belongs to `winner`.
    ArenaCompleted {
        arena_id: ArenaId,
        winner_hero: HeroId,
        loser_hero: HeroId,
        winner: AccountId,
    },
    /// The admin capability moved to a new holder.
    AdminTransferred { from: AccountId, to: AccountId },
}

/// Fieldless mirror of [`LedgerEvent`] used for filtered journal reads.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub enum LedgerEventKind {
    HeroCreated,
    HeroListed,
    HeroBought,
    HeroDelisted,
    PriceChanged,
    ArenaCreated,
    ArenaCompleted,
    AdminTransferred,
}

impl<AccountId, Balance> LedgerEvent<AccountId, Balance> {
    /// The kind tag of this record.
    pub fn kind(&self) -> LedgerEventKind {
        match self {
            LedgerEvent::HeroCreated { .. } => LedgerEventKind::HeroCreated,
            LedgerEvent::HeroListed { .. } => LedgerEventKind::HeroListed,
            LedgerEvent::HeroBought { .. } => LedgerEventKind::HeroBought,
            LedgerEvent::HeroDelisted { .. } => LedgerEventKind::HeroDelisted,
            LedgerEvent::PriceChanged { .. } => LedgerEventKind::PriceChanged,
            LedgerEvent::ArenaCreated { .. } => LedgerEventKind::ArenaCreated,
            LedgerEvent::ArenaCompleted { .. } => LedgerEventKind::ArenaCompleted,
            LedgerEvent::AdminTransferred { .. } => LedgerEventKind::AdminTransferred,
        }
    }
}
