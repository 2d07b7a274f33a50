pub mod panic;
#[cfg(test)]
pub mod probe;
