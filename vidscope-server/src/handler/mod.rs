pub mod aggregate;
pub mod health;
pub mod report;
