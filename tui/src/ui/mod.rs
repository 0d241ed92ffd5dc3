pub mod draw;
pub mod theme;
