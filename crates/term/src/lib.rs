//! Terminal presentation layer for the Game of Life.
//!
//! The core engine produces plain text snapshots; this crate puts them on a
//! terminal at a fixed rate. Encoding is separated from I/O so the exact bytes
//! of a frame can be unit-tested.
//!
//! - [`renderer`]: clears the screen and writes frames (raw terminal or plain stdout)
//! - [`pacer`]: fixed-rate frame schedule
//! - [`input`]: quit-key detection
//! - [`status`]: generation/population line

pub mod input;
pub mod pacer;
pub mod renderer;
pub mod status;

pub use term_life_core as core;
pub use term_life_types as types;

pub use input::should_quit;
pub use pacer::FramePacer;
pub use renderer::{encode_frame_into, encode_plain_into, OutputMode, TerminalRenderer};
pub use status::write_status;
