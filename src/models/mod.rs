pub mod month;
pub mod record;
pub mod salary;
