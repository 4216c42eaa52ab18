mod env;
mod errors;
mod helpers;
mod operations;
