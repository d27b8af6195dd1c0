pub mod account;
pub mod leads;
