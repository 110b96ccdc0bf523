mod clock;
pub use clock::*;

mod epoch;
pub use epoch::*;

pub mod log;
pub use log::*;

mod vec2;
pub use vec2::*;
