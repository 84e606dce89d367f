//! Pixel and tile coordinates used by the host.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
	fmt,
	ops::{Add, Sub},
};

/// Size of one build tile in pixels.
pub const TILE_SIZE: i32 = 32;
/// Biggest map side in tiles.
pub const MAX_MAP_TILES: i32 = 256;

/// Width and height in tiles.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
	pub x: i32,
	pub y: i32,
}
impl Size {
	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
}

/// Position on map in pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
	pub x: i32,
	pub y: i32,
}
impl Position {
	/// Returned by the host when there's no sensible position.
	pub const INVALID: Position = Position::new(32000, 32000);
	/// Returned by the host when a position is not applicable.
	pub const NONE: Position = Position::new(32000, 32032);

	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
	/// Position lies inside the biggest possible map.
	pub fn is_valid(self) -> bool {
		let max = MAX_MAP_TILES * TILE_SIZE;
		(0..max).contains(&self.x) && (0..max).contains(&self.y)
	}
	/// Tile which contains this position.
	pub fn to_tile(self) -> TilePosition {
		TilePosition::new(self.x.div_euclid(TILE_SIZE), self.y.div_euclid(TILE_SIZE))
	}
}
impl Add for Position {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self::new(self.x + other.x, self.y + other.y)
	}
}
impl Sub for Position {
	type Output = Self;

	fn sub(self, other: Self) -> Self {
		Self::new(self.x - other.x, self.y - other.y)
	}
}
impl From<TilePosition> for Position {
	fn from(tile: TilePosition) -> Self {
		Self::new(tile.x * TILE_SIZE, tile.y * TILE_SIZE)
	}
}
impl fmt::Display for Position {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Position on map in build tiles.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TilePosition {
	pub x: i32,
	pub y: i32,
}
impl TilePosition {
	pub const INVALID: TilePosition = TilePosition::new(1000, 1000);
	pub const NONE: TilePosition = TilePosition::new(1000, 1001);

	pub const fn new(x: i32, y: i32) -> Self {
		Self { x, y }
	}
	pub fn is_valid(self) -> bool {
		(0..MAX_MAP_TILES).contains(&self.x) && (0..MAX_MAP_TILES).contains(&self.y)
	}
}
impl Add<Size> for TilePosition {
	type Output = Self;

	fn add(self, size: Size) -> Self {
		Self::new(self.x + size.x, self.y + size.y)
	}
}
impl Add for TilePosition {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self::new(self.x + other.x, self.y + other.y)
	}
}
impl fmt::Display for TilePosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}
