pub mod board;
pub mod rules;
pub mod session;
pub mod types;
