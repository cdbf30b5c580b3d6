pub mod month;
pub mod style;

pub use month::Month;
pub use style::Style;
