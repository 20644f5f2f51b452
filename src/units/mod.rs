//! Definições e conversões de unidades.

pub mod speed;

pub use speed::{convert_speed, SpeedUnit};
