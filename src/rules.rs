/// Where callers that expose [`RULES`] as a readable document should publish it.
pub const RULES_URI: &str = "rules://dice";

/// Example used by [`help_prompt`] when the caller does not pick one.
pub const DEFAULT_EXAMPLE: &str = "3d6+2";

/// Reference text for the dice notation accepted by [`crate::parse`].
pub const RULES: &str = "\
Dice notation takes the form XdY+Z:
- X = number of dice (default 1 if omitted, at most 1000)
- Y = sides per die (minimum 2, at most 1000)
- Z = optional modifier, added or subtracted
The `d` may be upper or lower case. Surrounding whitespace is ignored.
Numbers use the ASCII digits 0-9 only.
Examples:
  - `d20` roll one 20-sided die
  - `3d6+2` roll three six-sided dice and add 2
  - `1d10` roll one 10-sided die
  - `36d12-10` roll 36 12-sided dice and subtract 10 from the total
";

/// A request asking for an explanation of dice notation, built around `example`.
///
/// # Examples
/// ```
/// use dice_roller::help_prompt;
///
/// let prompt = help_prompt(Some("2d8-1"));
/// assert!(prompt.contains("'2d8-1'"));
/// assert!(prompt.contains("rules://dice"));
/// ```
pub fn help_prompt(example: Option<&str>) -> String {
    let example = example.unwrap_or(DEFAULT_EXAMPLE);

    format!(
        "Explain how to write dice notation and give a few examples. \
         Include what '{example}' means. Reference {RULES_URI} if needed."
    )
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::parse;


    #[test]
    fn test_rule_examples_parse() {
        let examples: Vec<&str> = RULES.lines()
            .filter_map(|line| line.trim().strip_prefix("- `"))
            .filter_map(|line| line.split('`').next())
            .collect();

        assert_eq!(examples, vec!["d20", "3d6+2", "1d10", "36d12-10"]);
        for example in examples {
            assert!(parse(example).is_ok(), "{example}");
        }
    }

    #[test]
    fn test_only_ascii_digits() {
        assert!(RULES.contains("ASCII digits 0-9"));
        assert_eq!(parse("d\u{ff12}\u{ff10}").unwrap_err().kind(), crate::ErrorKind::FormatError);
        assert_eq!(parse("\u{0663}d6").unwrap_err().kind(), crate::ErrorKind::FormatError);
    }

    #[test]
    fn test_default_prompt() {
        let prompt = help_prompt(None);
        assert!(prompt.contains("'3d6+2'"));
        assert!(parse(DEFAULT_EXAMPLE).is_ok());
    }
}
