//! The power-less baseline: one move, then one build.

use super::{Power, PowerKind};

/// No special ability. Uses the trait defaults unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Standard;

impl Power for Standard {
    fn kind(&self) -> PowerKind {
        PowerKind::Standard
    }
}
