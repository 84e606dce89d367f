use crate::{game_data::UnitTypeData, geometry::Size, ids::UnitTypeId, player::Race};
use std::collections::HashMap;

/// Minimum frames between two attempts to fix a supply block.
pub const SUPPLY_CHECK_COOLDOWN: u32 = 400;
/// Frames the planned supply provider box stays on screen after its build time.
pub const SUPPLY_OVERLAY_PADDING: u32 = 100;
/// Minerals kept in reserve on top of the gated structure's price.
pub const BARRACKS_MARGIN: u32 = 50;
/// How many gated structures are ever ordered.
pub const BARRACKS_LIMIT: u32 = 1;
/// Level 2 groups common orders together and cuts the bot's APM.
pub const COMMAND_OPTIMIZATION_LEVEL: u32 = 2;
pub const GREETING: &str = "Hello world!";

pub const WORKER_IDS: [UnitTypeId; 3] = [UnitTypeId::TerranSCV, UnitTypeId::ZergDrone, UnitTypeId::ProtossProbe];
pub const RESOURCE_DEPOT_IDS: [UnitTypeId; 5] = [
	UnitTypeId::TerranCommandCenter,
	UnitTypeId::ZergHatchery,
	UnitTypeId::ZergLair,
	UnitTypeId::ZergHive,
	UnitTypeId::ProtossNexus,
];
pub const REFINERY_IDS: [UnitTypeId; 3] = [
	UnitTypeId::TerranRefinery,
	UnitTypeId::ZergExtractor,
	UnitTypeId::ProtossAssimilator,
];
pub const MINERAL_FIELD_IDS: [UnitTypeId; 3] = [
	UnitTypeId::MineralField,
	UnitTypeId::MineralFieldType2,
	UnitTypeId::MineralFieldType3,
];

macro_rules! data {
	(
		$id:ident, $name:literal, $race:ident,
		$minerals:literal, $gas:literal, $time:literal,
		$required:literal, $provided:literal,
		($w:literal, $h:literal), $builder:expr
	) => {
		(
			UnitTypeId::$id,
			UnitTypeData {
				id: UnitTypeId::$id,
				name: $name,
				race: Race::$race,
				mineral_price: $minerals,
				gas_price: $gas,
				build_time: $time,
				supply_required: $required,
				supply_provided: $provided,
				tile_size: Size::new($w, $h),
				what_builds: $builder,
			},
		)
	};
}

lazy_static! {
	pub static ref UNIT_DATA: HashMap<UnitTypeId, UnitTypeData> = {
		use UnitTypeId::*;
		[
			// Terran
			data!(TerranSCV, "Terran_SCV", Terran, 50, 0, 300, 2, 0, (1, 1), Some(TerranCommandCenter)),
			data!(TerranMarine, "Terran_Marine", Terran, 50, 0, 360, 2, 0, (1, 1), Some(TerranBarracks)),
			data!(TerranCommandCenter, "Terran_Command_Center", Terran, 400, 0, 1800, 0, 20, (4, 3), Some(TerranSCV)),
			data!(TerranSupplyDepot, "Terran_Supply_Depot", Terran, 100, 0, 600, 0, 16, (3, 2), Some(TerranSCV)),
			data!(TerranRefinery, "Terran_Refinery", Terran, 100, 0, 600, 0, 0, (4, 2), Some(TerranSCV)),
			data!(TerranBarracks, "Terran_Barracks", Terran, 150, 0, 1200, 0, 0, (4, 3), Some(TerranSCV)),
			// Protoss
			data!(ProtossProbe, "Protoss_Probe", Protoss, 50, 0, 300, 2, 0, (1, 1), Some(ProtossNexus)),
			data!(ProtossZealot, "Protoss_Zealot", Protoss, 100, 0, 600, 4, 0, (1, 1), Some(ProtossGateway)),
			data!(ProtossNexus, "Protoss_Nexus", Protoss, 400, 0, 1800, 0, 18, (4, 3), Some(ProtossProbe)),
			data!(ProtossPylon, "Protoss_Pylon", Protoss, 100, 0, 450, 0, 16, (2, 2), Some(ProtossProbe)),
			data!(ProtossAssimilator, "Protoss_Assimilator", Protoss, 100, 0, 600, 0, 0, (4, 2), Some(ProtossProbe)),
			data!(ProtossGateway, "Protoss_Gateway", Protoss, 150, 0, 900, 0, 0, (4, 3), Some(ProtossProbe)),
			// Zerg
			data!(ZergLarva, "Zerg_Larva", Zerg, 0, 0, 0, 0, 0, (1, 1), Some(ZergHatchery)),
			data!(ZergDrone, "Zerg_Drone", Zerg, 50, 0, 300, 2, 0, (1, 1), Some(ZergLarva)),
			data!(ZergZergling, "Zerg_Zergling", Zerg, 50, 0, 420, 1, 0, (1, 1), Some(ZergLarva)),
			data!(ZergOverlord, "Zerg_Overlord", Zerg, 100, 0, 600, 0, 16, (1, 1), Some(ZergLarva)),
			data!(ZergHatchery, "Zerg_Hatchery", Zerg, 300, 0, 1800, 0, 2, (4, 3), Some(ZergDrone)),
			data!(ZergLair, "Zerg_Lair", Zerg, 150, 100, 1500, 0, 2, (4, 3), Some(ZergHatchery)),
			data!(ZergHive, "Zerg_Hive", Zerg, 200, 150, 1800, 0, 2, (4, 3), Some(ZergLair)),
			data!(ZergSpawningPool, "Zerg_Spawning_Pool", Zerg, 200, 0, 1200, 0, 0, (3, 2), Some(ZergDrone)),
			data!(ZergExtractor, "Zerg_Extractor", Zerg, 50, 0, 600, 0, 0, (4, 2), Some(ZergDrone)),
			// Neutral
			data!(MineralField, "Resource_Mineral_Field", None, 0, 0, 0, 0, 0, (2, 1), Option::None),
			data!(MineralFieldType2, "Resource_Mineral_Field_Type_2", None, 0, 0, 0, 0, 0, (2, 1), Option::None),
			data!(MineralFieldType3, "Resource_Mineral_Field_Type_3", None, 0, 0, 0, 0, 0, (2, 1), Option::None),
			data!(VespeneGeyser, "Resource_Vespene_Geyser", None, 0, 0, 0, 0, 0, (4, 2), Option::None),
			data!(PowerupFlag, "Powerup_Flag", None, 0, 0, 0, 0, 0, (1, 1), Option::None),
			data!(None, "None", None, 0, 0, 0, 0, 0, (0, 0), Option::None),
			data!(Unknown, "Unknown", Unknown, 0, 0, 0, 0, 0, (0, 0), Option::None),
		]
		.into_iter()
		.collect()
	};
	/// Structures which give each race more supply.
	pub static ref SUPPLY_PROVIDERS: HashMap<Race, UnitTypeId> = hashmap! {
		Race::Terran => UnitTypeId::TerranSupplyDepot,
		Race::Protoss => UnitTypeId::ProtossPylon,
		Race::Zerg => UnitTypeId::ZergOverlord,
	};
	pub static ref RACE_WORKERS: HashMap<Race, UnitTypeId> = hashmap! {
		Race::Terran => UnitTypeId::TerranSCV,
		Race::Protoss => UnitTypeId::ProtossProbe,
		Race::Zerg => UnitTypeId::ZergDrone,
	};
}
