//! Domain data types

mod user;

pub use user::User;
