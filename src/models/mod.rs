pub mod beverage;
pub mod request;
