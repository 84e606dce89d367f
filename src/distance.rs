//! Traits for comparing distance between positions and units.

use crate::{geometry::Position, unit::Unit};

/// Basic trait for comparing distance.
pub trait Distance: Sized {
	/// Calculates squared euclidean distance from `self` to `other` in pixels.
	fn distance_squared<P: Into<Position>>(self, other: P) -> i64;

	/// Calculates euclidean distance from `self` to `other`.
	#[inline]
	fn distance<P: Into<Position>>(self, other: P) -> f32 {
		(self.distance_squared(other) as f32).sqrt()
	}
	/// Checks if distance between `self` and `other` is less than given `distance`.
	#[inline]
	fn is_closer<P: Into<Position>>(self, distance: i32, other: P) -> bool {
		self.distance_squared(other) < i64::from(distance) * i64::from(distance)
	}
	/// Checks if distance between `self` and `other` is greater than given `distance`.
	#[inline]
	fn is_further<P: Into<Position>>(self, distance: i32, other: P) -> bool {
		self.distance_squared(other) > i64::from(distance) * i64::from(distance)
	}
}

impl Distance for Position {
	#[inline]
	fn distance_squared<P: Into<Position>>(self, other: P) -> i64 {
		let other = other.into();
		let dx = i64::from(self.x - other.x);
		let dy = i64::from(self.y - other.y);
		dx * dx + dy * dy
	}
}
impl Distance for &Position {
	#[inline]
	fn distance_squared<P: Into<Position>>(self, other: P) -> i64 {
		(*self).distance_squared(other)
	}
}
impl Distance for &Unit {
	#[inline]
	fn distance_squared<P: Into<Position>>(self, other: P) -> i64 {
		self.position.distance_squared(other)
	}
}

impl From<&Unit> for Position {
	#[inline]
	fn from(u: &Unit) -> Self {
		u.position
	}
}

/// Helper trait for iterators of items implementing [`Distance`].
pub trait DistanceIterator<T>
where
	Self: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
	/// Returns closest to `target` item in iterator.
	/// Ties go to the item which comes first.
	fn closest<P: Into<Position> + Copy>(self, target: P) -> Option<T> {
		self.min_by_key(|u| u.distance_squared(target))
	}
	/// Returns furthest to `target` item in iterator.
	fn furthest<P: Into<Position> + Copy>(self, target: P) -> Option<T> {
		self.max_by_key(|u| u.distance_squared(target))
	}
	/// Returns squared distance to closest to `target` item in iterator.
	fn closest_distance_squared<P: Into<Position> + Copy>(self, target: P) -> Option<i64> {
		self.map(|u| u.distance_squared(target)).min()
	}
}
impl<I, T> DistanceIterator<T> for I
where
	I: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
}
