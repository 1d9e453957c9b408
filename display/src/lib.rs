pub use display::{frame_to_rgb24, Display, DisplayError};

mod display;
