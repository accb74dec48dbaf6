mod de;
mod negotiate;
pub mod panic;
mod signal;

pub use de::*;
pub use negotiate::*;
pub use signal::*;
