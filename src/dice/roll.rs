//! Rolling parsed dice.

use serde::{Deserialize, Serialize};

use super::notation::{parse, DiceNotation};
use crate::core::GameRng;

/// The result of rolling a notation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub notation: DiceNotation,
    /// One entry per die, modifier already added.
    pub rolls: Vec<i64>,
    pub total: i64,
}

impl DiceRoll {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.notation.valid
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = &self.notation;
        writeln!(f, "Rolling {}d{} (+{})", n.die_count, n.sides, n.modifier)?;
        writeln!(f, "Total: {}", self.total)?;
        write!(f, "Rolls: {:?}", self.rolls)
    }
}

/// Roll an already parsed notation.
///
/// Invalid notation rolls nothing. A notation marked valid that breaks the
/// parser's limits is treated as invalid too.
pub fn roll_notation(notation: DiceNotation, rng: &mut GameRng) -> DiceRoll {
    if !notation.valid || notation.check().is_err() {
        return DiceRoll::default();
    }

    let rolls: Vec<i64> = (0..notation.die_count)
        .map(|_| i64::from(rng.roll_die(notation.sides)) + notation.modifier)
        .collect();
    let total = rolls.iter().sum();

    DiceRoll {
        notation,
        rolls,
        total,
    }
}

/// Parse and roll `notation`.
///
/// ```
/// use athena_towers::core::GameRng;
/// use athena_towers::dice::roll;
///
/// let mut rng = GameRng::new(7);
/// let result = roll("3d6", &mut rng);
///
/// assert_eq!(result.rolls.len(), 3);
/// assert!((3..=18).contains(&result.total));
/// ```
pub fn roll(notation: &str, rng: &mut GameRng) -> DiceRoll {
    roll_notation(parse(notation), rng)
}

/// Roll and return only the total.
pub fn quick_roll(notation: &str, rng: &mut GameRng) -> i64 {
    roll(notation, rng).total
}
