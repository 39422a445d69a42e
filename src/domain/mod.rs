pub mod budget;
pub mod category;
pub mod common;
pub mod goal;

pub use common::{Displayable, NamedEntity};
