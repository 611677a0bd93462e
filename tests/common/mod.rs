// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use teller::application::TellerService;
use teller::domain::Cents;

/// Helper to create a fresh in-memory bank service
pub fn test_service() -> TellerService {
    TellerService::new("Test Bank")
}

/// Helper to create a service with one registered user (John Doe, PIN 1234)
pub fn service_with_user() -> Result<(TellerService, String)> {
    let mut service = test_service();
    let user = service.register_user("John", "Doe", "1234")?;
    Ok((service, user.id))
}

/// Sum of all account balances of one user
pub fn total_balance(service: &TellerService, user_id: &str) -> Result<Cents> {
    let mut total = 0;
    for index in 0..service.account_count(user_id)? {
        total += service.account_balance(user_id, index)?;
    }
    Ok(total)
}
