#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]

//! Dice notation such as `d20`, `3d6+2` or `36d12-10`, parsed into a validated
//! [`RollSpec`] and rolled with either a seeded, reproducible generator or OS entropy.
//!
//! ```
//! use dice_roller::{parse, execute};
//!
//! let spec = parse("2d6-3").unwrap();
//! let result = execute(&spec, Some(42));
//!
//! assert_eq!(result, execute(&spec, Some(42)));
//! assert_eq!(result.explanation(), "Roll 2 6 sided dice, subtract 3 from the result.");
//! ```


#[cfg(test)]
mod roll_test_strategies;

mod error;
mod random;
mod request;
mod roll;
mod rules;
mod parser;

#[cfg(feature = "cli")]
pub mod logger;

pub use error::{Error, ErrorKind, Field, Bound};
pub use random::{RandomSource, DiceRng};
pub use request::{RollRequest, Response, ErrorResponse};
pub use roll::{
    RollSpec, RollSpecBuilder, RollResult,
    MIN_COUNT, MAX_COUNT, MIN_SIDES, MAX_SIDES, MAX_MODIFIER
};
pub use rules::{RULES, RULES_URI, DEFAULT_EXAMPLE, help_prompt};
pub use parser::{ParserError, Parser, parse};


/// Rolls `spec` once with a generator created for this call.
///
/// With `Some(seed)` the dice come out the same on every run and platform;
/// with `None` they are seeded from the operating system.
pub fn execute(spec: &RollSpec, seed: Option<u64>) -> RollResult {
    spec.roll(seed)
}

/// The plain words description of `spec`, e.g. `Roll 1 20 sided die.`
pub fn explain(spec: &RollSpec) -> String {
    spec.explain()
}

/// Parses `notation` and rolls it once.
///
/// # Errors
/// Any error from [`parse`]; rolling itself cannot fail.
///
/// # Examples
/// ```
/// use dice_roller::roll;
///
/// let result = roll(" 3D6+2 ", Some(1)).unwrap();
/// assert_eq!(result.notation(), "3d6+2");
/// assert!(roll("3d6*2", None).is_err());
/// ```
pub fn roll(notation: &str, seed: Option<u64>) -> Result<RollResult, Error> {
    Ok(execute(&parse(notation)?, seed))
}


#[cfg(test)]
mod test {
    use super::*;


    #[test]
    fn test_seeded_roll_is_stable_across_calls() {
        let spec = parse("10d1000+5").unwrap();
        let first = execute(&spec, Some(u64::MAX));

        for _ in 0..5 {
            assert_eq!(execute(&spec, Some(u64::MAX)), first);
        }
    }

    #[test]
    fn test_seeded_roll_known_answer() {
        let result = execute(&parse("5d20").unwrap(), Some(42));

        assert_eq!(result.roll_results(), &[5, 14, 3, 20, 16]);
        assert_eq!(result.raw_total(), 58);
        assert_eq!(result.result(), 58);

        let result = roll("4d6+1", Some(0)).unwrap();
        assert_eq!(result.roll_results(), &[4, 5, 5, 3]);
        assert_eq!(result.result(), 18);
    }

    #[test]
    fn test_seeds_and_entropy_diverge() {
        let spec = parse("20d1000").unwrap();

        let seeded_a = execute(&spec, Some(1));
        let seeded_b = execute(&spec, Some(2));
        let unseeded_a = execute(&spec, None);
        let unseeded_b = execute(&spec, None);

        assert_ne!(seeded_a.roll_results(), seeded_b.roll_results());
        assert_ne!(unseeded_a.roll_results(), unseeded_b.roll_results());
    }

    #[test]
    fn test_explain_entry_point() {
        assert_eq!(explain(&parse("d20").unwrap()), "Roll 1 20 sided die.");
    }

    #[test]
    fn test_roll_spec_types_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RollSpec>();
        assert_send_sync::<RollResult>();
        assert_send_sync::<Error>();
    }

    #[test]
    fn test_parallel_callers() {
        let spec = parse("50d20").unwrap();

        let results: Vec<RollResult> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || execute(&spec, Some(99))))
                .collect();

            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    }
}
