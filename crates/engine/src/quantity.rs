use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const SCALE: i64 = 1000;

/// Signed volume represented as **integer thousandths** of its unit.
///
/// Water and stock levels are expressed in litres, chemical usage in
/// millilitres; the unit is given by the field holding the value. Storing a
/// fixed-point integer keeps totals exact, so summing the same records in any
/// order gives the same result.
///
/// On the wire a `Quantity` is a plain JSON number, rounded to the nearest
/// thousandth when read.
///
/// # Examples
///
/// ```rust
/// use engine::Quantity;
///
/// let water = Quantity::from_f64(12.5).unwrap();
/// assert_eq!(water.millis(), 12_500);
/// assert_eq!(water.to_string(), "12.5");
/// assert_eq!((water + Quantity::whole(3)).to_string(), "15.5");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Creates a quantity from integer thousandths.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Creates a quantity from a whole number of units.
    #[must_use]
    pub const fn whole(units: i64) -> Self {
        Self(units.saturating_mul(SCALE))
    }

    /// Converts a floating point amount, rounding to the nearest thousandth.
    ///
    /// Returns `None` for NaN, infinities and values outside the `i64` range.
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let scaled = (value * SCALE as f64).round();
        if scaled < i64::MIN as f64 || scaled > i64::MAX as f64 {
            return None;
        }
        Some(Self(scaled as i64))
    }

    /// Returns the raw value in thousandths.
    #[must_use]
    pub const fn millis(self) -> i64 {
        self.0
    }

    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Returns `true` if the quantity is 0.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the quantity is positive.
    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Multiplies by a whole factor, saturating at the numeric bounds.
    #[must_use]
    pub const fn times(self, factor: i64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Converts millilitres to litres, rounding half away from zero to the
    /// nearest millilitre.
    #[must_use]
    pub const fn ml_to_litres(self) -> Self {
        let half = if self.0 < 0 { -SCALE / 2 } else { SCALE / 2 };
        Self(self.0.saturating_add(half) / SCALE)
    }

    /// Returns `self - rhs`, never going below zero.
    #[must_use]
    pub fn saturating_sub_floor(self, rhs: Quantity) -> Self {
        Self(self.0.saturating_sub(rhs.0).max(0))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / SCALE as u64;
        let frac = abs % SCALE as u64;
        if frac == 0 {
            return write!(f, "{sign}{units}");
        }
        let digits = format!("{frac:03}");
        write!(f, "{sign}{units}.{}", digits.trim_end_matches('0'))
    }
}

impl Add for Quantity {
    type Output = Quantity;

    fn add(self, rhs: Quantity) -> Self::Output {
        Quantity(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Quantity) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Quantity {
    type Output = Quantity;

    fn sub(self, rhs: Quantity) -> Self::Output {
        Quantity(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Quantity {
    fn sum<I: Iterator<Item = Quantity>>(iter: I) -> Self {
        iter.fold(Quantity::ZERO, Add::add)
    }
}

impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % SCALE == 0 {
            serializer.serialize_i64(self.0 / SCALE)
        } else {
            serializer.serialize_f64(self.to_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Quantity::from_f64(value)
            .ok_or_else(|| serde::de::Error::custom(format!("quantity out of range: {value}")))
    }
}

/// Reads a nullable JSON number, mapping `null` to zero.
pub(crate) fn nullable_or_zero<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Quantity, D::Error> {
    Ok(Option::<Quantity>::deserialize(deserializer)?.unwrap_or_default())
}
