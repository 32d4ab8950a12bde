/// CustomError implementation: construction and Display.
pub mod custom_error;
