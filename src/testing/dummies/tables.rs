use crate::core::instance_header::InstanceHeader;
use crate::core::table::LabeledTable;
use std::sync::Arc;

const WEATHER_COLUMNS: [&str; 3] = ["weather", "windy", "play"];

/// Six rows: sunny is always `yes`, rainy always `no`, overcast depends on wind.
pub fn table_weather() -> LabeledTable {
    let records = [
        ["sunny", "false", "yes"],
        ["sunny", "true", "yes"],
        ["rainy", "false", "no"],
        ["rainy", "true", "no"],
        ["overcast", "false", "yes"],
        ["overcast", "true", "no"],
    ];
    LabeledTable::from_records("weather", &WEATHER_COLUMNS, &records, "play").unwrap()
}

pub fn header_weather() -> Arc<InstanceHeader> {
    Arc::clone(table_weather().header())
}

/// Four rows where `play` is a pure function of `weather`.
pub fn table_play_by_weather() -> LabeledTable {
    let records = [
        ["sunny", "yes"],
        ["sunny", "yes"],
        ["rainy", "no"],
        ["rainy", "no"],
    ];
    LabeledTable::from_records("play", &["weather", "play"], &records, "play").unwrap()
}

/// Every row plays.
pub fn table_pure() -> LabeledTable {
    let records = [
        ["sunny", "yes"],
        ["rainy", "yes"],
        ["overcast", "yes"],
    ];
    LabeledTable::from_records("pure", &["weather", "play"], &records, "play").unwrap()
}

/// Identical inputs with disagreeing labels, plus a column that is constant.
pub fn table_conflicting() -> LabeledTable {
    let records = [
        ["sunny", "calm", "yes"],
        ["sunny", "calm", "no"],
        ["sunny", "calm", "yes"],
    ];
    LabeledTable::from_records("conflict", &["weather", "wind", "play"], &records, "play")
        .unwrap()
}

/// `rows` rows whose `label` is fixed by `color`; `size` and `noise` are random.
pub fn table_by_color(rows: usize, seed: u64) -> LabeledTable {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    const COLORS: [&str; 3] = ["red", "green", "blue"];
    const LABELS: [&str; 3] = ["a", "b", "c"];
    const SIZES: [&str; 3] = ["s", "m", "l"];
    const NOISE: [&str; 2] = ["x", "y"];

    let mut rng = StdRng::seed_from_u64(seed);
    let records: Vec<[&str; 4]> = (0..rows)
        .map(|i| {
            let c = i % COLORS.len();
            [
                COLORS[c],
                SIZES[rng.random_range(0..SIZES.len())],
                NOISE[rng.random_range(0..NOISE.len())],
                LABELS[c],
            ]
        })
        .collect();
    LabeledTable::from_records(
        "colors",
        &["color", "size", "noise", "label"],
        &records,
        "label",
    )
    .unwrap()
}
