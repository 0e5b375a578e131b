//! Application Layer
//!
//! Use cases and application services.

pub mod check_token;
pub mod config;
pub mod issue_token;
pub mod manage_account;
pub mod register;
pub mod sign_in;

// Re-exports
pub use check_token::CheckTokenUseCase;
pub use config::AuthConfig;
pub use issue_token::IssueTokenUseCase;
pub use manage_account::{ManageAccountUseCase, UpdateAccountInput};
pub use register::{RegisterInput, RegisterUseCase};
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
