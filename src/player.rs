//! Races, players and game results.

use crate::{
	constants::{RACE_WORKERS, SUPPLY_PROVIDERS},
	ids::UnitTypeId,
};
use bw_macro::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of player assigned by the host.
pub type PlayerId = u32;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Race {
	Terran,
	Zerg,
	Protoss,
	/// Neutral units (minerals, geysers, critters).
	None,
	Unknown,
}
impl Race {
	/// Worker trained by this race's resource depots.
	pub fn worker(self) -> Option<UnitTypeId> {
		RACE_WORKERS.get(&self).copied()
	}
	/// Unit type which raises this race's supply cap.
	pub fn supply_provider(self) -> Option<UnitTypeId> {
		SUPPLY_PROVIDERS.get(&self).copied()
	}
}
impl Default for Race {
	fn default() -> Self {
		Race::None
	}
}
impl fmt::Display for Race {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Result for your bot passed to [`on_end`](crate::Player::on_end).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameResult {
	Victory,
	Defeat,
}
impl From<bool> for GameResult {
	fn from(is_winner: bool) -> Self {
		if is_winner {
			GameResult::Victory
		} else {
			GameResult::Defeat
		}
	}
}
