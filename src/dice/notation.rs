//! Parser for `[count]d<sides>[+modifier]`.

use nom::character::complete::{char, u32 as number};
use nom::combinator::{all_consuming, opt};
use nom::sequence::{preceded, tuple};
use nom::{Finish, IResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most dice a single notation may ask for.
pub const MAX_DICE: u32 = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiceError {
    #[error("malformed dice notation '{0}'")]
    Malformed(String),

    #[error("a die needs at least one side")]
    ZeroSides,

    #[error("{0} dice is more than the limit of {}", MAX_DICE)]
    TooManyDice(u32),
}

/// A parsed dice expression.
///
/// Invalid input parses to the all-zero value with `valid == false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceNotation {
    pub die_count: u32,
    pub sides: u32,
    /// Added to every die.
    pub modifier: i64,
    pub valid: bool,
}

impl DiceNotation {
    /// Parse `notation`, reporting why it was rejected.
    ///
    /// Surrounding whitespace is ignored; anything else outside the grammar
    /// (trailing text, a second modifier, a missing number) is an error.
    pub fn try_parse(notation: &str) -> Result<Self, DiceError> {
        let trimmed = notation.trim();
        let (_, (count, sides, modifier)) = all_consuming(dice)(trimmed)
            .finish()
            .map_err(|_| DiceError::Malformed(trimmed.to_string()))?;

        let parsed = Self {
            die_count: count.unwrap_or(1),
            sides,
            modifier: modifier.map_or(0, i64::from),
            valid: true,
        };
        parsed.check()?;
        Ok(parsed)
    }

    /// Check the numeric limits. Fields are public, so a notation built by
    /// hand or deserialized can claim `valid` without having been parsed.
    pub fn check(&self) -> Result<(), DiceError> {
        if self.sides == 0 {
            return Err(DiceError::ZeroSides);
        }
        if self.die_count > MAX_DICE {
            return Err(DiceError::TooManyDice(self.die_count));
        }
        Ok(())
    }
}

impl std::fmt::Display for DiceNotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.valid {
            return f.write_str("invalid");
        }
        write!(f, "{}d{}", self.die_count, self.sides)?;
        if self.modifier != 0 {
            write!(f, "+{}", self.modifier)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for DiceNotation {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

/// `[count]` `d` `sides` `[+modifier]`
fn dice(input: &str) -> IResult<&str, (Option<u32>, u32, Option<u32>)> {
    tuple((
        opt(number),
        preceded(char('d'), number),
        opt(preceded(char('+'), number)),
    ))(input)
}

/// Parse dice notation, folding any error into `valid: false`.
///
/// ```
/// use athena_towers::dice::parse;
///
/// let d = parse("2d6+3");
/// assert!(d.valid);
/// assert_eq!((d.die_count, d.sides, d.modifier), (2, 6, 3));
///
/// assert!(!parse("banana").valid);
/// ```
#[must_use]
pub fn parse(notation: &str) -> DiceNotation {
    DiceNotation::try_parse(notation).unwrap_or_default()
}
