pub mod field;
pub mod input;
pub mod select;

pub use field::Field;
pub use input::Input;
pub use select::Select;
