//! Value objects: the enumerated catalog attributes.

mod control;
mod epoch;
mod loco_type;
mod scale;

pub use control::Control;
pub use epoch::Epoch;
pub use loco_type::LocoType;
pub use scale::Scale;
