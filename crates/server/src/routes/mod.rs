pub mod health;
pub mod simplify;
