pub mod check;
pub mod classification;
pub mod error;
pub mod finding;
pub mod logger;
pub mod report;
pub mod unit;
