pub mod health;
pub mod role;
pub mod user;
