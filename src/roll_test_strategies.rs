use proptest::prelude::*;
use crate::roll::{RollSpec, MAX_MODIFIER};


pub(crate) fn modifier_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![
        Just(0i64),
        -1000i64..=1000,
        -MAX_MODIFIER..=MAX_MODIFIER,
    ]
}

pub(crate) fn roll_spec_strategy() -> impl Strategy<Value = RollSpec> {
    (1..=1000u32, 2..=1000u32, modifier_strategy())
        .prop_map(|(count, sides, modifier)| {
            RollSpec::builder(sides).count(count).modifier(modifier).build().unwrap()
        })
}

/// Raw `(count, sides, modifier)` triples straddling every bound.
pub(crate) fn spec_parts_strategy() -> impl Strategy<Value = (u32, u32, i64)> {
    (
        prop_oneof![0..=3u32, 998..=1003u32, 0..=u32::MAX],
        prop_oneof![0..=3u32, 998..=1003u32, 0..=u32::MAX],
        prop_oneof![
            modifier_strategy(),
            (MAX_MODIFIER - 2)..=(MAX_MODIFIER + 2),
            (-MAX_MODIFIER - 2)..=(-MAX_MODIFIER + 2),
        ]
    )
}
