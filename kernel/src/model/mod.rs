pub mod id;
pub mod name;
pub mod role;
pub mod user;
