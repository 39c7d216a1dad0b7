pub mod health;
pub mod message;
pub mod role;
pub mod user;
