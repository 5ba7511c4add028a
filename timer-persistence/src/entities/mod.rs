pub mod prelude;

pub mod solves;
pub mod users;
