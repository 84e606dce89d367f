//! Orders sent to the host and errors it reports back.

use crate::{geometry::TilePosition, ids::UnitTypeId};
use bw_macro::FromStr;
use num_traits::FromPrimitive;
use std::fmt;

/// Order issued to one of your units.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Order {
	/// Worker brings carried minerals or gas to the nearest depot.
	ReturnCargo { unit: u64 },
	/// Worker harvests from a mineral field or refinery.
	Gather { unit: u64, target: u64 },
	/// Producer trains a unit.
	Train { unit: u64, unit_type: UnitTypeId },
	/// Worker constructs a structure with its top-left corner at `location`.
	Build {
		unit: u64,
		unit_type: UnitTypeId,
		location: TilePosition,
	},
}
impl Order {
	/// Tag of the unit receiving the order.
	pub fn unit(&self) -> u64 {
		match self {
			Order::ReturnCargo { unit }
			| Order::Gather { unit, .. }
			| Order::Train { unit, .. }
			| Order::Build { unit, .. } => *unit,
		}
	}
}
impl fmt::Display for Order {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Order::ReturnCargo { unit } => write!(f, "{} return cargo", unit),
			Order::Gather { unit, target } => write!(f, "{} gather {}", unit, target),
			Order::Train { unit, unit_type } => write!(f, "{} train {}", unit, unit_type.name()),
			Order::Build {
				unit,
				unit_type,
				location,
			} => write!(f, "{} build {} at {}", unit, unit_type.name(), location),
		}
	}
}

/// Reason of the last rejected order, as reported by the host.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
pub enum ErrorCode {
	UnitDoesNotExist = 0,
	UnitNotVisible,
	UnitNotOwned,
	UnitBusy,
	IncompatibleUnitType,
	IncompatibleTechType,
	IncompatibleState,
	AlreadyResearched,
	FullyUpgraded,
	CurrentlyResearching,
	CurrentlyUpgrading,
	InsufficientMinerals,
	InsufficientGas,
	InsufficientSupply,
	InsufficientEnergy,
	InsufficientTech,
	InsufficientAmmo,
	InsufficientSpace,
	InvalidTilePosition,
	UnbuildableLocation,
	UnreachableLocation,
	OutOfRange,
	UnableToHit,
	AccessDenied,
	FileNotFound,
	InvalidParameter,
	None,
	Unknown,
}
impl ErrorCode {
	/// Name the host uses when printing the error.
	pub fn name(self) -> &'static str {
		match self {
			ErrorCode::UnitDoesNotExist => "Unit_Does_Not_Exist",
			ErrorCode::UnitNotVisible => "Unit_Not_Visible",
			ErrorCode::UnitNotOwned => "Unit_Not_Owned",
			ErrorCode::UnitBusy => "Unit_Busy",
			ErrorCode::IncompatibleUnitType => "Incompatible_UnitType",
			ErrorCode::IncompatibleTechType => "Incompatible_TechType",
			ErrorCode::IncompatibleState => "Incompatible_State",
			ErrorCode::AlreadyResearched => "Already_Researched",
			ErrorCode::FullyUpgraded => "Fully_Upgraded",
			ErrorCode::CurrentlyResearching => "Currently_Researching",
			ErrorCode::CurrentlyUpgrading => "Currently_Upgrading",
			ErrorCode::InsufficientMinerals => "Insufficient_Minerals",
			ErrorCode::InsufficientGas => "Insufficient_Gas",
			ErrorCode::InsufficientSupply => "Insufficient_Supply",
			ErrorCode::InsufficientEnergy => "Insufficient_Energy",
			ErrorCode::InsufficientTech => "Insufficient_Tech",
			ErrorCode::InsufficientAmmo => "Insufficient_Ammo",
			ErrorCode::InsufficientSpace => "Insufficient_Space",
			ErrorCode::InvalidTilePosition => "Invalid_Tile_Position",
			ErrorCode::UnbuildableLocation => "Unbuildable_Location",
			ErrorCode::UnreachableLocation => "Unreachable_Location",
			ErrorCode::OutOfRange => "Out_Of_Range",
			ErrorCode::UnableToHit => "Unable_To_Hit",
			ErrorCode::AccessDenied => "Access_Denied",
			ErrorCode::FileNotFound => "File_Not_Found",
			ErrorCode::InvalidParameter => "Invalid_Parameter",
			ErrorCode::None => "None",
			ErrorCode::Unknown => "Unknown",
		}
	}
}
impl Default for ErrorCode {
	fn default() -> Self {
		ErrorCode::None
	}
}
impl fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
impl std::error::Error for ErrorCode {}
