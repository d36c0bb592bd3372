

#[allow(unused_imports)]
pub use helpers::*;
