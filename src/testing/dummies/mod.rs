mod tables;

pub use tables::{
    header_weather, table_by_color, table_conflicting, table_play_by_weather, table_pure,
    table_weather,
};
