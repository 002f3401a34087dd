pub mod forecast;
pub mod period;

pub use forecast::*;
pub use period::*;
