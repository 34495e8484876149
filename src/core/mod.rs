pub mod collections;
pub mod convert;
pub mod datetime;
pub mod math;
pub mod misc;
pub mod specs;
pub mod text;
pub mod validators;

pub use crate::domain::model::{PcSpecs, TimeOffset};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
