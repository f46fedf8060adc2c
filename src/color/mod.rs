/// Byte/hex to RGB color mapping.
pub mod mapper;
