use std::{fmt::Display, str::FromStr};
use crate::{DiceRng, RandomSource};
use crate::error::{Bound, Error, Field};


/// Fewest dice a roll may use.
pub const MIN_COUNT: u16 = 1;
/// Most dice a roll may use.
pub const MAX_COUNT: u16 = 1000;
/// Fewest faces a die may have.
pub const MIN_SIDES: u16 = 2;
/// Most faces a die may have.
pub const MAX_SIDES: u16 = 1000;
/// Largest modifier magnitude for which `raw_total + modifier` still fits in an `i64`.
pub const MAX_MODIFIER: i64 = i64::MAX - MAX_COUNT as i64 * MAX_SIDES as i64;


/// A validated dice roll: `count` dice with `sides` faces each, plus a signed modifier.
///
/// A `RollSpec` can only be obtained through [`RollSpec::new`], [`RollSpec::builder()`],
/// [`crate::parse`] or [`crate::roll_spec!`], all of which reject out of range values,
/// so holding one means the bounds are already checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RollSpec {
    count: u16,
    sides: u16,
    modifier: i64
}

impl RollSpec {
    /// Validates and builds a spec.
    ///
    /// # Errors
    /// Returns [`Error::Range`] if `count` is outside `1..=1000`, `sides` is outside
    /// `2..=1000`, or the modifier magnitude exceeds [`MAX_MODIFIER`].
    ///
    /// # Examples
    /// ```
    /// use dice_roller::{RollSpec, ErrorKind};
    ///
    /// let spec = RollSpec::new(3, 6, 2).unwrap();
    /// assert_eq!(spec.to_string(), "3d6+2");
    ///
    /// let err = RollSpec::new(1, 1, 0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::RangeError);
    /// ```
    pub fn new(count: u32, sides: u32, modifier: i64) -> Result<Self, Error> {
        let sides = check_bounds(Field::Sides, sides, MIN_SIDES, MAX_SIDES)?;
        let count = check_bounds(Field::Count, count, MIN_COUNT, MAX_COUNT)?;

        if modifier > MAX_MODIFIER {
            return Err(Error::range(Field::Modifier, modifier, Bound::AtMost(MAX_MODIFIER)));
        }

        if modifier < -MAX_MODIFIER {
            return Err(Error::range(Field::Modifier, modifier, Bound::AtLeast(-MAX_MODIFIER)));
        }

        Ok(Self { count, sides, modifier })
    }

    /// Creates a new [`RollSpecBuilder`] for dice with `sides` faces.
    /// Count defaults to 1 and modifier to 0.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::RollSpec;
    ///
    /// let spec = RollSpec::builder(12)
    ///     .count(36)
    ///     .modifier(-10)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(format!("{spec}"), "36d12-10");
    /// ```
    pub fn builder(sides: u32) -> RollSpecBuilder {
        RollSpecBuilder::new(sides)
    }

    /// Number of dice.
    pub const fn count(&self) -> u16 {
        self.count
    }

    /// Faces per die.
    pub const fn sides(&self) -> u16 {
        self.sides
    }

    /// Signed value added to the sum of the dice.
    pub const fn modifier(&self) -> i64 {
        self.modifier
    }

    /// Canonical notation, `{count}d{sides}` followed by the signed modifier if it is not zero.
    /// Same as the [`Display`] output.
    pub fn notation(&self) -> String {
        self.to_string()
    }

    /// Describes the roll in plain words.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::RollSpec;
    ///
    /// let d20 = RollSpec::new(1, 20, 0).unwrap();
    /// assert_eq!(d20.explain(), "Roll 1 20 sided die.");
    ///
    /// let spec = RollSpec::new(2, 6, -3).unwrap();
    /// assert_eq!(spec.explain(), "Roll 2 6 sided dice, subtract 3 from the result.");
    /// ```
    pub fn explain(&self) -> String {
        let noun = if self.count > 1 { "dice" } else { "die" };

        let suffix = match self.modifier {
            0 => ".".to_string(),
            m if m > 0 => format!(", add {m} to the result."),
            m => format!(", subtract {} from the result.", m.unsigned_abs())
        };

        format!("Roll {} {} sided {}{}", self.count, self.sides, noun, suffix)
    }

    /// Rolls the dice with a generator built for this call only: seeded when
    /// `seed` is given, from OS entropy otherwise.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::RollSpec;
    ///
    /// let spec = RollSpec::new(4, 6, 0).unwrap();
    /// assert_eq!(spec.roll(Some(7)), spec.roll(Some(7)));
    /// ```
    pub fn roll(&self, seed: Option<u64>) -> RollResult {
        let mut rng = DiceRng::new(seed);
        tracing::debug!(
            notation = %self,
            deterministic = rng.is_deterministic(),
            "rolling dice"
        );

        self.roll_with(&mut rng)
    }

    /// Rolls the dice, drawing exactly `count` values from `source` in order.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::{DiceRng, RollSpec};
    ///
    /// let spec = RollSpec::new(3, 6, 2).unwrap();
    /// let result = spec.roll_with(&mut DiceRng::seeded(1));
    ///
    /// assert_eq!(result.notation(), "3d6+2");
    /// assert_eq!(result.roll_results().len(), 3);
    /// assert_eq!(result.result(), result.raw_total() + 2);
    /// ```
    pub fn roll_with<R: RandomSource + ?Sized>(&self, source: &mut R) -> RollResult {
        let roll_results = self.generate_values(source);
        let raw_total: i64 = roll_results.iter().map(|&v| v as i64).sum();

        RollResult {
            notation: self.notation(),
            result: raw_total + self.modifier,
            raw_total,
            roll_results,
            explanation: self.explain()
        }
    }

    /// Draws one value in `1..=sides` per die, in order.
    pub fn generate_values<R: RandomSource + ?Sized>(&self, source: &mut R) -> Vec<u16> {
        tracing::trace!(count = self.count, sides = self.sides, "drawing die faces");

        (0..self.count)
            .map(|_| source.between(1, self.sides))
            .collect()
    }

    /// Smallest possible result, every die showing 1.
    ///
    /// # Examples
    /// ```
    /// use dice_roller::RollSpec;
    ///
    /// let spec = RollSpec::new(2, 6, -3).unwrap();
    /// assert_eq!(spec.min(), -1);
    /// assert_eq!(spec.max(), 9);
    /// assert_eq!(spec.avg(), 4.0);
    /// ```
    pub const fn min(&self) -> i64 {
        self.count as i64 + self.modifier
    }

    /// Largest possible result, every die showing its highest face.
    pub const fn max(&self) -> i64 {
        self.count as i64 * self.sides as i64 + self.modifier
    }

    /// Expected result of the roll.
    pub fn avg(&self) -> f64 {
        (self.min() as f64 + self.max() as f64) / 2.0
    }

    /// Equivalent to `(self.min(), self.max())`.
    pub const fn possible_values(&self) -> (i64, i64) {
        (self.min(), self.max())
    }
}

impl Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;

        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}")
        }
    }
}

impl FromStr for RollSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}


fn check_bounds(field: Field, value: u32, min: u16, max: u16) -> Result<u16, Error> {
    if value < min as u32 {
        return Err(Error::range(field, value, Bound::AtLeast(min as i64)));
    }

    if value > max as u32 {
        return Err(Error::range(field, value, Bound::AtMost(max as i64)));
    }

    Ok(value as u16)
}


/// A builder for creating [`RollSpec`] instances with a fluent API.
///
/// Start with [`RollSpec::builder()`], chain [`RollSpecBuilder::count()`] and
/// [`RollSpecBuilder::modifier()`], then call [`RollSpecBuilder::build()`].
#[derive(Debug, Clone)]
pub struct RollSpecBuilder {
    sides: u32,
    count: u32,
    modifier: i64
}

impl RollSpecBuilder {
    fn new(sides: u32) -> Self {
        Self {
            sides,
            count: 1,
            modifier: 0
        }
    }

    /// Sets the number of dice to roll.
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the signed modifier added after summing.
    pub fn modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    /// Same as [`RollSpec::new`].
    pub fn build(self) -> Result<RollSpec, Error> {
        RollSpec::new(self.count, self.sides, self.modifier)
    }
}


/// The outcome of rolling a [`RollSpec`] once.
///
/// Holds a copy of the canonical notation rather than the [`RollSpec`] itself.
/// Serializes as `{ notation, result, rawTotal, rollResults, explanation }`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RollResult {
    notation: String,
    result: i64,
    raw_total: i64,
    roll_results: Vec<u16>,
    explanation: String
}

impl RollResult {
    /// Canonical notation of the rolled spec.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// `raw_total + modifier`.
    pub fn result(&self) -> i64 {
        self.result
    }

    /// Sum of the dice before the modifier.
    pub fn raw_total(&self) -> i64 {
        self.raw_total
    }

    /// Each die in the order it was rolled.
    pub fn roll_results(&self) -> &[u16] {
        &self.roll_results
    }

    /// The plain words description of the rolled [`RollSpec`].
    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

impl Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolls: Vec<String> = self.roll_results.iter().map(|v| v.to_string()).collect();
        write!(f, "{}: [{}] = {}", self.notation, rolls.join(", "), self.result)
    }
}


/// A macro for conveniently creating [`RollSpec`] instances.
///
/// # Syntax
/// - `roll_spec!(SIDES)`: one die of `SIDES` faces (e.g. `roll_spec!(20)` for 1d20).
/// - `roll_spec!(SIDES, COUNT)`: `COUNT` dice (e.g. `roll_spec!(6, 3)` for 3d6).
/// - `roll_spec!(SIDES, COUNT, MODIFIER)`: with a modifier (e.g. `roll_spec!(6, 3, 2)` for 3d6+2).
///
/// # Returns
/// `Result<RollSpec, Error>` - The result of calling `RollSpecBuilder::build()`.
///
/// # Examples
/// ```
/// use dice_roller::roll_spec;
///
/// assert_eq!(roll_spec!(20).unwrap().to_string(), "1d20");
/// assert_eq!(roll_spec!(10, 3).unwrap().to_string(), "3d10");
/// assert_eq!(roll_spec!(12, 36, -10).unwrap().to_string(), "36d12-10");
/// assert!(roll_spec!(1).is_err());
/// ```
#[macro_export]
macro_rules! roll_spec {
    ($sides:literal) => {
        $crate::RollSpec::builder($sides)
            .build()
    };

    ($sides:literal, $count:literal) => {
        $crate::RollSpec::builder($sides)
            .count($count)
            .build()
    };

    ($sides:literal, $count:literal, $modifier:expr) => {
        $crate::RollSpec::builder($sides)
            .count($count)
            .modifier($modifier)
            .build()
    }
}
