use super::UnitTypeId;
use crate::{
	constants::UNIT_DATA,
	game_data::UnitTypeData,
	geometry::Size,
	player::Race,
};

impl UnitTypeId {
	/// Static data of this type.
	///
	/// Panics if the type has no entry in [`UNIT_DATA`], which never happens for listed ids.
	#[inline]
	pub fn data(self) -> &'static UnitTypeData {
		&UNIT_DATA[&self]
	}
	#[inline]
	pub fn name(self) -> &'static str {
		self.data().name
	}
	#[inline]
	pub fn race(self) -> Race {
		self.data().race
	}
	#[inline]
	pub fn mineral_price(self) -> u32 {
		self.data().mineral_price
	}
	#[inline]
	pub fn gas_price(self) -> u32 {
		self.data().gas_price
	}
	#[inline]
	pub fn build_time(self) -> u32 {
		self.data().build_time
	}
	#[inline]
	pub fn tile_size(self) -> Size {
		self.data().tile_size
	}
	#[inline]
	pub fn what_builds(self) -> Option<UnitTypeId> {
		self.data().what_builds
	}
	#[inline]
	pub fn is_worker(self) -> bool {
		matches!(
			self,
			UnitTypeId::TerranSCV | UnitTypeId::ZergDrone | UnitTypeId::ProtossProbe
		)
	}
	/// Command Center, Nexus, or Hatchery (with its morphs).
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_resource_depot(self) -> bool {
		matches!(
			self,
			UnitTypeId::TerranCommandCenter
			| UnitTypeId::ZergHatchery
			| UnitTypeId::ZergLair
			| UnitTypeId::ZergHive
			| UnitTypeId::ProtossNexus
		)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_refinery(self) -> bool {
		matches!(
			self,
			UnitTypeId::TerranRefinery
			| UnitTypeId::ZergExtractor
			| UnitTypeId::ProtossAssimilator
		)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_mineral_field(self) -> bool {
		matches!(
			self,
			UnitTypeId::MineralField
			| UnitTypeId::MineralFieldType2
			| UnitTypeId::MineralFieldType3
		)
	}
	/// A worker can harvest from this unit.
	#[inline]
	pub fn is_harvestable(self) -> bool {
		self.is_mineral_field() || self.is_refinery()
	}
	#[inline]
	pub fn is_building(self) -> bool {
		let size = self.tile_size();
		size.x > 1 || size.y > 1
	}
}
