pub mod user_repository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{PostgresUserRepository, UserRepository};
