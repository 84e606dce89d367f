//! Ordered collection of units keyed by tag.

use crate::{distance::Distance, geometry::Position, ids::UnitTypeId, unit::Unit};
use indexmap::{
	map::{IntoIter as IndexIntoIter, Keys, Values, ValuesMut},
	IndexMap,
};
use itertools::Itertools;
use std::iter::FromIterator;

/// Units keep the order the host reported them in, so iteration and tie-breaking are deterministic.
#[derive(Debug, Default, Clone)]
pub struct Units(IndexMap<u64, Unit>);
impl Units {
	#[inline]
	pub fn new() -> Self {
		Units(IndexMap::new())
	}

	#[inline]
	pub fn first(&self) -> Option<&Unit> {
		self.0.values().next()
	}

	#[inline]
	pub fn push(&mut self, u: Unit) -> Option<Unit> {
		self.0.insert(u.tag, u)
	}

	/// Removes unit keeping order of the rest.
	#[inline]
	pub fn remove(&mut self, tag: u64) -> Option<Unit> {
		self.0.shift_remove(&tag)
	}

	#[inline]
	pub fn iter(&self) -> Values<u64, Unit> {
		self.0.values()
	}

	#[inline]
	pub fn iter_mut(&mut self) -> ValuesMut<u64, Unit> {
		self.0.values_mut()
	}

	#[inline]
	pub fn tags(&self) -> Keys<u64, Unit> {
		self.0.keys()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn clear(&mut self) {
		self.0.clear()
	}

	#[inline]
	pub fn get(&self, tag: u64) -> Option<&Unit> {
		self.0.get(&tag)
	}

	#[inline]
	pub fn get_mut(&mut self, tag: u64) -> Option<&mut Unit> {
		self.0.get_mut(&tag)
	}

	pub fn filter<F>(&self, f: F) -> Self
	where
		F: Fn(&&Unit) -> bool,
	{
		self.iter().filter(f).cloned().collect()
	}
	pub fn of_type(&self, u_type: UnitTypeId) -> Self {
		self.filter(|u| u.type_id == u_type)
	}
	pub fn owned_by(&self, player: u32) -> Self {
		self.filter(|u| u.is_owned_by(player))
	}
	pub fn workers(&self) -> Self {
		self.filter(|u| u.is_worker())
	}
	pub fn resource_depots(&self) -> Self {
		self.filter(|u| u.is_resource_depot())
	}
	/// Units of given type still in production.
	pub fn incomplete_of_type(&self, u_type: UnitTypeId) -> usize {
		self.iter()
			.filter(|u| u.exists && u.type_id == u_type && !u.is_completed)
			.count()
	}
	pub fn closest<P: Into<Position> + Copy>(&self, target: P) -> Option<&Unit> {
		self.iter().min_by_key(|u| u.distance_squared(target))
	}
	/// Count of units per type, sorted by type id.
	pub fn counts(&self) -> Vec<(UnitTypeId, usize)> {
		let groups = self.iter().map(|u| u.type_id).sorted().group_by(|id| *id);
		let counts = groups.into_iter().map(|(id, group)| (id, group.count())).collect();
		counts
	}
}

impl FromIterator<Unit> for Units {
	#[inline]
	fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
		Self(iter.into_iter().map(|u| (u.tag, u)).collect())
	}
}

impl IntoIterator for Units {
	type Item = Unit;
	type IntoIter = std::iter::Map<IndexIntoIter<u64, Unit>, fn((u64, Unit)) -> Unit>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter().map(unit_of as fn((u64, Unit)) -> Unit)
	}
}
#[inline]
fn unit_of((_, u): (u64, Unit)) -> Unit {
	u
}
impl<'a> IntoIterator for &'a Units {
	type Item = &'a Unit;
	type IntoIter = Values<'a, u64, Unit>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.0.values()
	}
}

impl Extend<Unit> for Units {
	#[inline]
	fn extend<T: IntoIterator<Item = Unit>>(&mut self, iter: T) {
		self.0.extend(iter.into_iter().map(|u| (u.tag, u)));
	}
}
