pub mod about;
pub mod error;
pub mod game;
