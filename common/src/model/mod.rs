pub mod example;
pub mod problem;
pub mod record;
