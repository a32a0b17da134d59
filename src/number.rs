//! The business logic of the example: drawing a random number and
//! classifying its parity. Kept free of any workflow machinery so it can
//! be tested with a plain seeded RNG.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lower bound of the generated range (inclusive)
pub const MIN: i64 = 1;

/// Upper bound of the generated range (inclusive)
pub const MAX: i64 = 100;

/// Draw a uniformly distributed integer in `[MIN, MAX]`.
///
/// Generic over the RNG so production code can pass `rand::thread_rng()`
/// while tests pass a seeded `StdRng` for reproducible runs.
pub fn generate<R: Rng>(rng: &mut R) -> i64 {
    rng.gen_range(MIN..=MAX)
}

/// Whether an integer is evenly divisible by two
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parity {
    /// Divisible by two
    Even,
    /// Not divisible by two
    Odd,
}

impl Parity {
    /// Classify an integer by its remainder modulo two.
    pub fn of(n: i64) -> Self {
        if n % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    /// The lowercase name used in reports and metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parity::Even => "even",
            Parity::Odd => "odd",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build the human-readable report line for a checked number.
pub fn classification_message(n: i64) -> String {
    format!("The number {} is {}!", n, Parity::of(n))
}
