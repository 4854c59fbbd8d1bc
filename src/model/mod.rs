pub mod groups;
pub mod params;
pub mod reading;
pub mod result;

#[cfg(test)]
#[path = "../../tests/src_inline/model/tests.rs"]
mod tests;
