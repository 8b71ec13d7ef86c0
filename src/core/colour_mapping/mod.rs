pub mod factory;
pub mod kinds;
pub mod maps;
pub mod smooth;
