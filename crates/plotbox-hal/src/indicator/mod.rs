pub mod matrix;
pub mod rgb;
