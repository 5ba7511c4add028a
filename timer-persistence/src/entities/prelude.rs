pub use super::solves::Entity as Solves;
pub use super::users::Entity as Users;
