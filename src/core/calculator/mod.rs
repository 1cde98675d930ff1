pub mod business_days;
pub mod experience;
