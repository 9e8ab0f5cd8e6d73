pub mod numeric;

pub use numeric::parse_decimal;
