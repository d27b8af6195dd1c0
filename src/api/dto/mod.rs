pub mod account;
pub mod lead;
pub mod validation;
