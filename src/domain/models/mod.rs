pub mod account;
pub mod lead;
