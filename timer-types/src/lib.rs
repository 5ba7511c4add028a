pub mod solve;
pub mod user;

// Re-export all types
pub use solve::*;
pub use user::*;
