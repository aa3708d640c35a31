//! Money and VAT value objects.
//!
//! Amounts are `rust_decimal` values so that summing many cart lines never
//! accumulates binary floating point drift.

use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount in the shop currency.
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Scaling by a quantity (e.g. unit price times cart line count).
impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, quantity: Decimal) -> Self {
        Self(self.0 * quantity)
    }
}

/// A VAT rate in percent (e.g. `20` for 20%).
#[derive(
    Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct VatRate(Decimal);

impl VatRate {
    pub fn new(percent: Decimal) -> Self {
        Self(percent)
    }

    pub fn percent(&self) -> Decimal {
        self.0
    }

    /// VAT share of a net amount: `net / 100 * percent`.
    pub fn apply_to(&self, net: Money) -> Money {
        Money(net.0 / Decimal::ONE_HUNDRED * self.0)
    }
}

impl ValueObject for VatRate {}

impl From<Decimal> for VatRate {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}
