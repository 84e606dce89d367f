#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use bw_macro::FromStr;
use num_traits::FromPrimitive;

#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[enum_from_str(use_primitives)]
pub enum UnitTypeId {
	TerranMarine = 0,
	TerranSCV = 7,
	ZergLarva = 35,
	ZergZergling = 37,
	ZergDrone = 41,
	ZergOverlord = 42,
	ProtossProbe = 64,
	ProtossZealot = 65,
	TerranCommandCenter = 106,
	TerranSupplyDepot = 109,
	TerranRefinery = 110,
	TerranBarracks = 111,
	ZergHatchery = 131,
	ZergLair = 132,
	ZergHive = 133,
	ZergSpawningPool = 142,
	ZergExtractor = 149,
	ProtossNexus = 154,
	ProtossPylon = 156,
	ProtossAssimilator = 157,
	ProtossGateway = 160,
	MineralField = 176,
	MineralFieldType2 = 177,
	MineralFieldType3 = 178,
	VespeneGeyser = 188,
	PowerupFlag = 215,
	None = 228,
	Unknown = 229,
}
