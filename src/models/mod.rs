pub mod championship;
pub mod fixture;
pub mod standings;
pub mod stats;
pub mod team;
