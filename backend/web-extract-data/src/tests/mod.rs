mod error;
mod transaction;
