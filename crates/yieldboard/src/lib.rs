pub mod board;
pub mod config;
pub mod store;
pub mod ui;
pub mod workflow;

pub use board::{Board, BrandCard};
pub use config::Config;
pub use store::Store;
pub use workflow::{Dashboard, RegistrationError, Registrar, WorkflowState};
