//! Snapshot of a single unit as the host reports it on the current frame.
#![allow(missing_docs)]

use crate::{
	geometry::{Position, TilePosition},
	ids::UnitTypeId,
	player::{PlayerId, Race},
};
use bw_macro::variant_checkers;

/// What the decision loop can do with a unit on this frame.
///
/// Derived from live flags every time, never stored between frames.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnitStatus {
	/// Unit died or is no longer accessible.
	NonExistent,
	/// Lockdown, maelstrom or stasis.
	Disabled,
	/// Loaded into a transport, unpowered or stuck.
	NonActionable,
	/// Still in production or busy constructing a structure.
	Incomplete,
	Idle,
	Busy,
}
impl UnitStatus {
	/// Unit can receive orders.
	#[inline]
	pub fn is_eligible(self) -> bool {
		matches!(self, UnitStatus::Idle | UnitStatus::Busy)
	}
}

/// Unit handle valid only for the frame it was read on.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
	/// Unique and constant for each unit.
	pub tag: u64,
	/// Player id of the owner.
	pub player: PlayerId,
	pub type_id: UnitTypeId,
	/// Center of the unit in pixels.
	pub position: Position,
	/// Top-left tile of the unit's footprint.
	pub tile_position: TilePosition,

	pub exists: bool,
	pub is_locked_down: bool,
	pub is_maelstrommed: bool,
	pub is_stasised: bool,
	/// Unit is inside a transport or bunker.
	pub is_loaded: bool,
	/// Protoss structure is powered by pylon (always `true` for other units).
	pub is_powered: bool,
	pub is_stuck: bool,
	pub is_completed: bool,
	/// Worker is building a structure or structure is being built.
	pub is_constructing: bool,
	pub is_idle: bool,
	pub is_gathering_minerals: bool,
	pub is_gathering_gas: bool,
	pub is_carrying_minerals: bool,
	pub is_carrying_gas: bool,
	/// Tag of a carried item which is not a resource (e.g. a flag).
	pub power_up: Option<u64>,
}
impl Unit {
	/// Completed idle unit of given type at given position, with every other flag cleared.
	pub fn new(tag: u64, player: PlayerId, type_id: UnitTypeId, position: Position) -> Self {
		Self {
			tag,
			player,
			type_id,
			position,
			tile_position: position.to_tile(),
			exists: true,
			is_locked_down: false,
			is_maelstrommed: false,
			is_stasised: false,
			is_loaded: false,
			is_powered: true,
			is_stuck: false,
			is_completed: true,
			is_constructing: false,
			is_idle: true,
			is_gathering_minerals: false,
			is_gathering_gas: false,
			is_carrying_minerals: false,
			is_carrying_gas: false,
			power_up: None,
		}
	}

	#[inline]
	pub fn race(&self) -> Race {
		self.type_id.race()
	}
	#[inline]
	pub fn is_worker(&self) -> bool {
		self.type_id.is_worker()
	}
	#[inline]
	pub fn is_resource_depot(&self) -> bool {
		self.type_id.is_resource_depot()
	}
	#[inline]
	pub fn is_mineral_field(&self) -> bool {
		self.type_id.is_mineral_field()
	}
	#[inline]
	pub fn is_refinery(&self) -> bool {
		self.type_id.is_refinery()
	}
	#[inline]
	pub fn is_carrying_resource(&self) -> bool {
		self.is_carrying_minerals || self.is_carrying_gas
	}
	#[inline]
	pub fn has_power_up(&self) -> bool {
		self.power_up.is_some()
	}
	#[inline]
	pub fn is_owned_by(&self, player: PlayerId) -> bool {
		self.player == player
	}
	/// Affected by a status which prevents any orders.
	#[inline]
	pub fn is_disabled(&self) -> bool {
		self.is_locked_down || self.is_maelstrommed || self.is_stasised
	}
	#[inline]
	pub fn is_non_actionable(&self) -> bool {
		self.is_loaded || !self.is_powered || self.is_stuck
	}
	#[inline]
	pub fn is_incomplete(&self) -> bool {
		!self.is_completed || self.is_constructing
	}
	/// Checks eligibility filters in order and returns the first one that applies.
	pub fn status(&self) -> UnitStatus {
		if !self.exists {
			UnitStatus::NonExistent
		} else if self.is_disabled() {
			UnitStatus::Disabled
		} else if self.is_non_actionable() {
			UnitStatus::NonActionable
		} else if self.is_incomplete() {
			UnitStatus::Incomplete
		} else if self.is_idle {
			UnitStatus::Idle
		} else {
			UnitStatus::Busy
		}
	}
}
