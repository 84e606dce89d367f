//! Static information about unit types.

use crate::{geometry::Size, ids::UnitTypeId, player::Race};

/// Information about specific unit type.
#[derive(Debug, Clone)]
pub struct UnitTypeData {
	pub id: UnitTypeId,
	/// Name as the host prints it (e.g. `Terran_SCV`).
	pub name: &'static str,
	pub race: Race,
	pub mineral_price: u32,
	pub gas_price: u32,
	/// Build time in frames.
	pub build_time: u32,
	pub supply_required: u32,
	pub supply_provided: u32,
	/// Footprint in build tiles (`1x1` for non-structures).
	pub tile_size: Size,
	/// Unit type which produces this one or `None` if it can't be produced.
	pub what_builds: Option<UnitTypeId>,
}
