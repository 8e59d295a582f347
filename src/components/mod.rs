mod header;
mod map;

pub use self::{header::*, map::*};
