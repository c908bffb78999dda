pub mod categories;
pub mod fallback;
pub mod goals;
pub mod health;
pub mod me;
