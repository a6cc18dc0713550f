use proptest::prelude::*;


fn core_strategy() -> impl Strategy<Value = String> {
    (prop::option::of(1u16..=1000), 2u16..=1000)
        .prop_map(|(count, sides)| match count {
            Some(count) => format!("{count}d{sides}"),
            None => format!("d{sides}")
        })
}

/// Valid notation written loosely, paired with its canonical form.
pub(crate) fn loose_notation_strategy() -> impl Strategy<Value = (String, String)> {
    (
        prop::option::of(1u16..=1000),
        0usize..3,
        "[dD]",
        2u16..=1000,
        prop::option::of((prop_oneof![Just('+'), Just('-')], 0u32..=100_000)),
        "[ \\t\\n]{0,3}",
        "[ \\t\\n]{0,3}"
    ).prop_map(|(count, zeros, dice, sides, modifier, before, after)| {
        let mut loose = before;
        let mut canonical = String::new();

        match count {
            Some(count) => {
                loose.push_str(&format!("{}{count}", "0".repeat(zeros)));
                canonical.push_str(&count.to_string());
            },
            None => canonical.push('1')
        }

        loose.push_str(&format!("{dice}{sides}"));
        canonical.push_str(&format!("d{sides}"));

        if let Some((op, value)) = modifier {
            loose.push_str(&format!("{op}{value}"));
            match (op, value) {
                (_, 0) => {},
                ('+', v) => canonical.push_str(&format!("+{v}")),
                (_, v) => canonical.push_str(&format!("-{v}"))
            }
        }

        loose.push_str(&after);
        (loose, canonical)
    })
}

/// Inputs that must never match the grammar.
pub(crate) fn malformed_notation_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[0-9]{0,3}[dD]",
        "[0-9]{1,4}",
        "[a-ce-zA-CE-Z]{1,6}",
        (core_strategy(), "[*/x%^!kK]", 0u16..100)
            .prop_map(|(core, garbage, n)| format!("{core}{garbage}{n}")),
        (core_strategy(), "[+\\-]")
            .prop_map(|(core, op)| format!("{core}{op}")),
        (1u16..=1000, 2u16..=1000)
            .prop_map(|(count, sides)| format!("{count} d{sides}")),
        (core_strategy(), "[+\\-]", 0u16..100, "[+\\-]", 0u16..100)
            .prop_map(|(core, op1, a, op2, b)| format!("{core}{op1}{a}{op2}{b}")),
        (core_strategy(), core_strategy())
            .prop_map(|(first, second)| format!("{first}{second}")),
    ]
}
