pub mod cascade;
pub mod render;
pub mod toggle;

pub use crate::domain::model::{Level, OptionEntry, OptionList, Trigger};
pub use crate::domain::ports::{Dom, OptionSource, SelectControl};
pub use crate::utils::error::Result;
