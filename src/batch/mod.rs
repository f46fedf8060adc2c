/// Cross-file frame accumulation and flush policy.
pub mod accumulator;
