pub mod field;

pub use field::SpinField;
