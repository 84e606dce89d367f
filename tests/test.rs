#[macro_use]
extern crate num_derive;

use bw_macro::{variant_checkers, FromStr, ParseEnumError};
use num_traits::FromPrimitive;
use rust_bw::prelude::*;

#[derive(Debug, PartialEq, FromPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
enum MyEnum {
	Variant0,
	Variant1 = -1001,
	Variant2,
	Variant3 = 2002,
}

#[variant_checkers]
#[derive(Debug, Clone, Copy)]
enum Phase {
	Opening,
	MidGame,
	EndGame2,
}

#[test]
fn check_enum_err() {
	assert_eq!("Variant4".parse::<MyEnum>(), Err(ParseEnumError));
	assert_eq!("4".parse::<MyEnum>(), Err(ParseEnumError));
}

#[test]
fn check_enum_ok() {
	assert_eq!("Variant1".parse::<MyEnum>(), Ok(MyEnum::Variant1));
	assert_eq!("0".parse::<MyEnum>(), Ok(MyEnum::Variant0));
	assert_eq!("-1000".parse::<MyEnum>(), Ok(MyEnum::Variant2));
	assert_eq!("2002".parse::<MyEnum>(), Ok(MyEnum::Variant3));
}

#[test]
fn check_variant_checkers() {
	assert!(Phase::MidGame.is_mid_game());
	assert!(!Phase::Opening.is_end_game2());
	assert!(Phase::EndGame2.is_end_game2());
}

#[test]
fn parse_config_values() {
	assert_eq!("Barracks".parse::<Strategy>(), Ok(Strategy::Barracks));
	assert!("barracks".parse::<Strategy>().is_err());
	assert_eq!("ZergSpawningPool".parse::<UnitTypeId>(), Ok(UnitTypeId::ZergSpawningPool));
	assert_eq!("13".parse::<ErrorCode>(), Ok(ErrorCode::InsufficientSupply));
}
