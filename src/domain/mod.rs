mod account;
mod ledger;
mod money;
mod pin;
mod transaction;
mod user;

pub use account::*;
pub use ledger::*;
pub use money::*;
pub use pin::*;
pub use transaction::*;
pub use user::*;
