pub mod category;
pub mod goal;
pub mod id;
pub mod user;
