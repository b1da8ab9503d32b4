pub mod currency;
pub mod status;
