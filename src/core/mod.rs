pub mod format;
pub mod roster;

pub use crate::domain::model::Participant;
pub use crate::domain::ports::{ConfigProvider, Console, Storage};
pub use crate::utils::error::Result;
