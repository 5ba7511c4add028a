pub mod solve_repository;
pub mod user_repository;

pub use solve_repository::{NewSolve, SolveChanges, SolveRepository};
pub use user_repository::{NewUser, UserRepository};
