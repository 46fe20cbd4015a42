pub mod exchange;

pub use exchange::{ActiveField, ExchangeForm};
