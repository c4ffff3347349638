pub mod routes;
pub mod startup;
pub mod errors;
pub mod views;

pub use startup::run;
