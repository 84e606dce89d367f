//! Ids of unit types known to the agent, numbered the way the host numbers them.
#![allow(missing_docs)]

mod unit_typeid;

pub use unit_typeid::UnitTypeId;

mod impls;
