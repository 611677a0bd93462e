pub mod application;
pub mod bank;
pub mod cli;
pub mod domain;

pub use application::{AppError, TellerService};
pub use bank::Bank;
pub use domain::*;
