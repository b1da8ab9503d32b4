pub mod ecos;
pub mod exim;
pub mod http;
pub mod provider;
