pub mod enumerate;
pub mod limits;
