pub mod offer_service;
pub mod order_service;
pub mod user_service;
