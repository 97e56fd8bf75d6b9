//! # Daily Quality Rules
//!
//! One call to [`apply_daily_update`] is one night at the inn. Every variant's
//! rule lives in the single `match` below.
//!
//! ## Rule Table
//! ```text
//! ┌────────────────┬──────────────────────────────────────────────────────────┐
//! │ Kind           │ Per day                                                  │
//! ├────────────────┼──────────────────────────────────────────────────────────┤
//! │ Standard       │ nothing changes                                          │
//! │ AgedBrie       │ sell_in -1, quality +1 (+2 once sell_in < 0), cap 50     │
//! │ BackstagePass  │ quality +1 / +2 (≤10 days) / +3 (≤5 days), cap 50;       │
//! │                │ quality = 0 once sell_in ≤ 0; then sell_in -1            │
//! │ Sulfuras       │ nothing changes, quality may exceed 50                   │
//! │ Conjured       │ sell_in -1, quality -2 (-4 once sell_in < 0), floor 0    │
//! └────────────────┴──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Matters
//! ```text
//! AgedBrie / Conjured     BackstagePass
//! ───────────────────     ─────────────
//! 1. sell_in -= 1         1. test sell_in (pre-decrement)
//! 2. adjust quality       2. adjust quality
//! 3. test sell_in < 0     3. sell_in -= 1
//! ```
//!
//! Quality is never observed below zero, not even between the two Conjured
//! decrements. Values already outside `[0, 50]` are left alone.

use serde::{Deserialize, Serialize};

use crate::types::ItemKind;
use crate::{MAX_QUALITY, MIN_QUALITY};

/// The mutable part of an item: what one night changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityState {
    pub sell_in: i64,
    pub quality: i64,
}

impl QualityState {
    pub const fn new(sell_in: i64, quality: i64) -> Self {
        QualityState { sell_in, quality }
    }
}

/// Applies one day of ageing to `state` according to `kind`.
///
/// ## Example
/// ```rust
/// use gilded_core::{apply_daily_update, ItemKind, QualityState};
///
/// let next = apply_daily_update(ItemKind::BackstagePass, QualityState::new(5, 20));
/// assert_eq!(next, QualityState::new(4, 23));
///
/// // Concert is over
/// let next = apply_daily_update(ItemKind::BackstagePass, QualityState::new(0, 20));
/// assert_eq!(next, QualityState::new(-1, 0));
/// ```
pub fn apply_daily_update(kind: ItemKind, state: QualityState) -> QualityState {
    let QualityState {
        mut sell_in,
        mut quality,
    } = state;

    match kind {
        ItemKind::Standard | ItemKind::Sulfuras => {}

        ItemKind::AgedBrie => {
            sell_in = sell_in.saturating_sub(1);
            quality = raise(quality);
            if sell_in < 0 {
                quality = raise(quality);
            }
        }

        ItemKind::BackstagePass => {
            if sell_in > 0 {
                quality = raise(quality);
                if sell_in < 11 {
                    quality = raise(quality);
                }
                if sell_in < 6 {
                    quality = raise(quality);
                }
            } else {
                quality = MIN_QUALITY;
            }
            sell_in = sell_in.saturating_sub(1);
        }

        ItemKind::Conjured => {
            sell_in = sell_in.saturating_sub(1);
            quality = degrade_twice(quality);
            if sell_in < 0 {
                quality = degrade_twice(quality);
            }
        }
    }

    QualityState { sell_in, quality }
}

/// +1, only while below the ceiling.
#[inline]
fn raise(quality: i64) -> i64 {
    if quality < MAX_QUALITY {
        quality + 1
    } else {
        quality
    }
}

/// -2 clamped at zero, only while above zero.
#[inline]
fn degrade_twice(quality: i64) -> i64 {
    if quality > MIN_QUALITY {
        (quality - 2).max(MIN_QUALITY)
    } else {
        quality
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
