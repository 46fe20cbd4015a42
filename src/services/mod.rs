pub mod auth_service;
pub mod balance_service;
pub mod card_service;
pub mod deposit_service;
pub mod exchange_service;
pub mod send_service;
pub mod withdraw_service;
