pub mod button;
pub mod row;

pub use button::*;
pub use row::*;
