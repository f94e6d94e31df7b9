//! Typed per-family operations on [`Controller`](crate::Controller).
//!
//! Each method maps to one registry row; argument checks happen in the
//! dispatcher.

mod compact;
mod dps;
mod mdps;
mod network;
mod pmd;

use crate::registry::Family;

/// MDPS-24W power supply model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mdps {
    W75,
    W96,
}

impl From<Mdps> for Family {
    fn from(model: Mdps) -> Self {
        match model {
            Mdps::W75 => Family::Mdps24w75,
            Mdps::W96 => Family::Mdps24w96,
        }
    }
}
