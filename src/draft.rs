pub mod pick_sequence;
pub mod session;

pub use session::{DraftError, DraftSession, DraftSnapshot, PickError, PickSuccess};
