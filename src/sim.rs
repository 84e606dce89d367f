//! Headless in-memory host.
//!
//! [`SimGame`] implements [`Game`] with just enough rules to exercise an agent:
//! orders are validated and charged the way the host does it, production finishes after
//! the unit's build time, and mining workers come back with cargo after a random trip.

use crate::{
	action::{ErrorCode, Order},
	debug::{Color, EffectKind},
	distance::DistanceIterator,
	game::Game,
	geometry::{Position, TilePosition, TILE_SIZE},
	ids::UnitTypeId,
	player::{GameResult, PlayerId, Race},
	unit::Unit,
	units::Units,
	BWResult, Event, Player,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::ops::RangeInclusive;

/// Minerals or gas delivered by one worker trip.
pub const CARGO_AMOUNT: u32 = 8;
/// Frames a worker spends on one mining trip.
pub const TRIP_FRAMES: RangeInclusive<u32> = 150..=250;
/// Player id of neutral units.
pub const NEUTRAL: PlayerId = 11;
/// Frames between two larvae spawned by a hatchery.
pub const LARVA_FRAMES: u32 = 342;
/// Larvae a hatchery keeps at most.
pub const MAX_LARVAE: usize = 3;

#[derive(Debug, Clone, Copy)]
struct Job {
	unit: u64,
	producer: u64,
	remaining: u32,
}

pub struct SimGame {
	pub paused: bool,
	pub player: Option<PlayerId>,
	pub frame: u32,
	pub latency: u32,
	pub map: String,
	pub minerals: u32,
	pub gas: u32,
	/// Supply in half-units, like [`UnitTypeData`](crate::game_data::UnitTypeData).
	pub supply_used: u32,
	pub supply_total: u32,
	/// Every order is rejected with this error while set.
	pub rejecting: Option<ErrorCode>,
	pub optimization_level: u32,
	/// Chat messages sent by the agent.
	pub chat: Vec<String>,
	/// Lines printed to host console.
	pub console: Vec<String>,
	/// Every order the agent tried to issue, with acceptance.
	pub orders: Vec<(u32, Order, bool)>,
	/// Draw calls with the frame they were made on.
	pub drawings: Vec<(u32, EffectKind)>,
	units: Units,
	placements: FxHashMap<UnitTypeId, Option<TilePosition>>,
	jobs: Vec<Job>,
	trips: FxHashMap<u64, u32>,
	last_error: ErrorCode,
	next_tag: u64,
	rng: StdRng,
}

impl Default for SimGame {
	fn default() -> Self {
		Self::new(0)
	}
}

impl SimGame {
	/// Empty game controlled by player `0`.
	pub fn new(seed: u64) -> Self {
		Self {
			paused: false,
			player: Some(0),
			frame: 0,
			latency: 2,
			map: "Simulated".to_string(),
			minerals: 50,
			gas: 0,
			supply_used: 0,
			supply_total: 0,
			rejecting: None,
			optimization_level: 0,
			chat: Vec::new(),
			console: Vec::new(),
			orders: Vec::new(),
			drawings: Vec::new(),
			units: Units::new(),
			placements: FxHashMap::default(),
			jobs: Vec::new(),
			trips: FxHashMap::default(),
			last_error: ErrorCode::None,
			next_tag: 1,
			rng: StdRng::seed_from_u64(seed),
		}
	}

	/// Usual melee start: a resource depot with 4 workers, 8 mineral fields and a geyser.
	/// Zerg also start with an overlord and three larvae.
	pub fn melee(race: Race, seed: u64) -> Self {
		let mut game = Self::new(seed);
		let depot = match race {
			Race::Protoss => UnitTypeId::ProtossNexus,
			Race::Zerg => UnitTypeId::ZergHatchery,
			_ => UnitTypeId::TerranCommandCenter,
		};
		let base = Position::new(1024, 1024);
		game.add_unit(depot, base);
		if let Some(worker) = depot.race().worker() {
			for i in 0..4 {
				game.add_unit(worker, base + Position::new(-48 + 32 * i, 80));
			}
		}
		for i in 0..8 {
			game.add_neutral(UnitTypeId::MineralField, base + Position::new(-224 + 64 * i, 256));
		}
		game.add_neutral(UnitTypeId::VespeneGeyser, base + Position::new(320, 0));
		if depot == UnitTypeId::ZergHatchery {
			game.add_unit(UnitTypeId::ZergOverlord, base + Position::new(0, -128));
			for i in 0..MAX_LARVAE as i32 {
				game.add_unit(UnitTypeId::ZergLarva, base + Position::new(-32 + 32 * i, 64));
			}
		}
		game
	}

	fn spawn(&mut self, player: PlayerId, unit_type: UnitTypeId, position: Position) -> u64 {
		let tag = self.next_tag;
		self.next_tag += 1;
		let mut u = Unit::new(tag, player, unit_type, position);
		if unit_type.is_building() {
			let size = unit_type.tile_size();
			u.tile_position = Position::new(
				position.x - size.x * TILE_SIZE / 2,
				position.y - size.y * TILE_SIZE / 2,
			)
			.to_tile();
		}
		self.units.push(u);
		tag
	}

	/// Adds completed idle unit for the controlled player and counts its supply.
	pub fn add_unit(&mut self, unit_type: UnitTypeId, position: Position) -> u64 {
		let data = unit_type.data();
		self.supply_used += data.supply_required;
		self.supply_total += data.supply_provided;
		self.spawn(self.player.unwrap_or_default(), unit_type, position)
	}

	/// Adds unit owned by nobody (minerals, geysers).
	pub fn add_neutral(&mut self, unit_type: UnitTypeId, position: Position) -> u64 {
		self.spawn(NEUTRAL, unit_type, position)
	}

	/// Adds unit owned by another player.
	pub fn add_foreign(&mut self, player: PlayerId, unit_type: UnitTypeId, position: Position) -> u64 {
		self.spawn(player, unit_type, position)
	}

	pub fn unit(&self, tag: u64) -> Option<&Unit> {
		self.units.get(tag)
	}

	/// Direct access to unit flags.
	pub fn unit_mut(&mut self, tag: u64) -> Option<&mut Unit> {
		self.units.get_mut(tag)
	}

	pub fn units(&self) -> &Units {
		&self.units
	}

	/// Overrides the answer of [`build_location`](Game::build_location) for given type.
	pub fn set_placement(&mut self, unit_type: UnitTypeId, location: Option<TilePosition>) {
		self.placements.insert(unit_type, location);
	}

	/// Orders issued on given frame.
	pub fn orders_on(&self, frame: u32) -> Vec<Order> {
		self.orders
			.iter()
			.filter(|(f, ..)| *f == frame)
			.map(|(_, order, _)| *order)
			.collect()
	}

	/// Draw calls made on given frame.
	pub fn drawings_on(&self, frame: u32) -> Vec<&EffectKind> {
		self.drawings
			.iter()
			.filter(|(f, _)| *f == frame)
			.map(|(_, shape)| shape)
			.collect()
	}

	/// Moves the game one frame forward and returns events for units finished on it.
	pub fn advance(&mut self) -> Vec<Event> {
		if self.paused {
			return Vec::new();
		}
		self.frame += 1;
		if self.frame % LARVA_FRAMES == 0 {
			self.spawn_larvae();
		}

		let mut events = Vec::new();
		let mut finished = Vec::new();
		self.jobs.retain_mut(|job| {
			job.remaining = job.remaining.saturating_sub(1);
			if job.remaining == 0 {
				finished.push(*job);
				false
			} else {
				true
			}
		});
		for job in finished {
			if let Some(u) = self.units.get_mut(job.unit) {
				u.is_completed = true;
				u.is_constructing = false;
				u.is_idle = true;
				self.supply_total += u.type_id.data().supply_provided;
				events.push(Event::UnitComplete(u.clone()));
			}
			if let Some(producer) = self.units.get_mut(job.producer) {
				producer.is_constructing = false;
				producer.is_idle = true;
			}
		}

		let mut arrived = Vec::new();
		for (tag, left) in self.trips.iter_mut() {
			*left = left.saturating_sub(1);
			if *left == 0 {
				arrived.push(*tag);
			}
		}
		for tag in arrived {
			self.trips.remove(&tag);
			if let Some(u) = self.units.get_mut(tag) {
				u.is_carrying_minerals = u.is_gathering_minerals;
				u.is_carrying_gas = u.is_gathering_gas;
				u.is_gathering_minerals = false;
				u.is_gathering_gas = false;
				u.is_idle = true;
			}
		}
		events
	}

	/// Every completed hatchery adds a larva until there are [`MAX_LARVAE`] per hatchery.
	fn spawn_larvae(&mut self) {
		let player = match self.player {
			Some(player) => player,
			None => return,
		};
		let own = self.units.owned_by(player);
		let hatcheries: Vec<Position> = own
			.iter()
			.filter(|u| u.race() == Race::Zerg && u.is_resource_depot() && u.is_completed)
			.map(|u| u.position)
			.collect();
		let cap = MAX_LARVAE * hatcheries.len();
		let mut larvae = own.of_type(UnitTypeId::ZergLarva).len();
		for position in hatcheries {
			if larvae >= cap {
				break;
			}
			self.spawn(player, UnitTypeId::ZergLarva, position + Position::new(0, 2 * TILE_SIZE));
			larvae += 1;
		}
	}

	/// Runs [`advance`](Self::advance) `frames` times, collecting events.
	pub fn advance_by(&mut self, frames: u32) -> Vec<Event> {
		(0..frames).flat_map(|_| self.advance()).collect()
	}

	fn check(&self, order: &Order) -> Result<(), ErrorCode> {
		if let Some(error) = self.rejecting {
			return Err(error);
		}
		let u = self
			.units
			.get(order.unit())
			.filter(|u| u.exists)
			.ok_or(ErrorCode::UnitDoesNotExist)?;
		if Some(u.player) != self.player {
			return Err(ErrorCode::UnitNotOwned);
		}
		if u.is_disabled() || u.is_non_actionable() || u.is_incomplete() {
			return Err(ErrorCode::UnitBusy);
		}
		match *order {
			Order::ReturnCargo { .. } => {
				if !u.is_carrying_resource() {
					return Err(ErrorCode::IncompatibleState);
				}
			}
			Order::Gather { target, .. } => {
				let target = self
					.units
					.get(target)
					.filter(|t| t.exists)
					.ok_or(ErrorCode::UnitDoesNotExist)?;
				if !u.is_worker() || !(target.is_mineral_field() || target.is_refinery()) {
					return Err(ErrorCode::IncompatibleUnitType);
				}
				if target.is_refinery() && !target.is_completed {
					return Err(ErrorCode::IncompatibleState);
				}
			}
			Order::Train { unit_type, .. } => {
				self.check_price(u, unit_type)?;
				if self.supply_used + unit_type.data().supply_required > self.supply_total {
					return Err(ErrorCode::InsufficientSupply);
				}
			}
			Order::Build {
				unit_type, location, ..
			} => {
				self.check_price(u, unit_type)?;
				if !location.is_valid() {
					return Err(ErrorCode::InvalidTilePosition);
				}
			}
		}
		Ok(())
	}

	fn check_price(&self, producer: &Unit, unit_type: UnitTypeId) -> Result<(), ErrorCode> {
		let builder = unit_type.what_builds();
		// Hatcheries train through their larvae.
		let from_larva = builder == Some(UnitTypeId::ZergLarva) && producer.is_resource_depot();
		if builder != Some(producer.type_id) && !from_larva {
			return Err(ErrorCode::IncompatibleUnitType);
		}
		if !producer.is_idle && !producer.is_gathering_minerals {
			return Err(ErrorCode::UnitBusy);
		}
		if self.minerals < unit_type.mineral_price() {
			return Err(ErrorCode::InsufficientMinerals);
		}
		if self.gas < unit_type.gas_price() {
			return Err(ErrorCode::InsufficientGas);
		}
		Ok(())
	}

	fn produce(&mut self, producer: u64, unit_type: UnitTypeId, position: Position) {
		let data = unit_type.data();
		self.minerals -= data.mineral_price;
		self.gas -= data.gas_price;
		self.supply_used += data.supply_required;

		let tag = self.spawn(self.player.unwrap_or_default(), unit_type, position);
		if let Some(u) = self.units.get_mut(tag) {
			u.is_completed = false;
			u.is_idle = false;
			u.is_constructing = unit_type.is_building();
		}
		self.jobs.push(Job {
			unit: tag,
			producer,
			remaining: data.build_time.max(1),
		});
	}

	fn execute(&mut self, order: Order) {
		match order {
			Order::ReturnCargo { unit } => {
				if let Some(u) = self.units.get_mut(unit) {
					if u.is_carrying_minerals {
						self.minerals += CARGO_AMOUNT;
					}
					if u.is_carrying_gas {
						self.gas += CARGO_AMOUNT;
					}
					u.is_gathering_minerals = u.is_carrying_minerals;
					u.is_gathering_gas = u.is_carrying_gas;
					u.is_carrying_minerals = false;
					u.is_carrying_gas = false;
					u.is_idle = false;
				}
				let trip = self.rng.gen_range(TRIP_FRAMES);
				self.trips.insert(unit, trip);
			}
			Order::Gather { unit, target } => {
				let minerals = self.units.get(target).map_or(false, |t| t.is_mineral_field());
				if let Some(u) = self.units.get_mut(unit) {
					u.is_gathering_minerals = minerals;
					u.is_gathering_gas = !minerals;
					u.is_idle = false;
				}
				let trip = self.rng.gen_range(TRIP_FRAMES);
				self.trips.insert(unit, trip);
			}
			Order::Train { unit, unit_type } => {
				let position = match self.units.get_mut(unit) {
					Some(producer) => {
						producer.is_idle = false;
						producer.position + Position::new(0, 2 * TILE_SIZE)
					}
					None => return,
				};
				self.produce(unit, unit_type, position);
			}
			Order::Build {
				unit,
				unit_type,
				location,
			} => {
				let mut morphs = false;
				if let Some(builder) = self.units.get_mut(unit) {
					morphs = builder.type_id == UnitTypeId::ZergLarva;
					builder.is_idle = false;
					builder.is_gathering_minerals = false;
					builder.is_gathering_gas = false;
					builder.is_constructing = builder.race() == Race::Terran;
				}
				self.trips.remove(&unit);
				let size = unit_type.tile_size();
				let center = Position::from(location)
					+ Position::new(size.x * TILE_SIZE / 2, size.y * TILE_SIZE / 2);
				self.produce(unit, unit_type, center);
				// Larva turns into the ordered unit.
				if morphs {
					self.units.remove(unit);
				}
			}
		}
	}
}

impl Game for SimGame {
	fn is_paused(&self) -> bool {
		self.paused
	}
	fn self_player(&self) -> Option<PlayerId> {
		self.player
	}
	fn frame_count(&self) -> u32 {
		self.frame
	}
	fn latency_frames(&self) -> u32 {
		self.latency
	}
	fn map_name(&self) -> String {
		self.map.clone()
	}
	fn self_units(&self) -> Units {
		match self.player {
			Some(player) => self.units.owned_by(player),
			None => Units::new(),
		}
	}
	fn closest_unit(&self, from: &Unit, filter: &dyn Fn(&Unit) -> bool) -> Option<Unit> {
		self.units
			.iter()
			.filter(|u| u.exists && u.tag != from.tag && filter(*u))
			.closest(from.position)
			.cloned()
	}
	fn last_error(&self) -> ErrorCode {
		self.last_error
	}
	fn build_location(&self, unit_type: UnitTypeId, near: TilePosition) -> Option<TilePosition> {
		match self.placements.get(&unit_type) {
			Some(location) => *location,
			None => Some(near + TilePosition::new(2, 2)).filter(|l| l.is_valid()),
		}
	}
	fn incomplete_unit_count(&self, unit_type: UnitTypeId) -> u32 {
		match self.player {
			Some(player) => self.units.owned_by(player).incomplete_of_type(unit_type) as u32,
			None => 0,
		}
	}
	fn minerals(&self) -> u32 {
		self.minerals
	}
	fn gas(&self) -> u32 {
		self.gas
	}

	fn send_text(&mut self, text: &str) {
		self.chat.push(text.to_string());
	}
	fn print(&mut self, text: &str) {
		self.console.push(text.to_string());
	}
	fn set_command_optimization_level(&mut self, level: u32) {
		self.optimization_level = level;
	}
	fn issue(&mut self, order: Order) -> bool {
		let accepted = match self.check(&order) {
			Ok(()) => {
				self.execute(order);
				true
			}
			Err(error) => {
				self.last_error = error;
				false
			}
		};
		self.orders.push((self.frame, order, accepted));
		accepted
	}
	fn draw_text_map(&mut self, pos: Position, text: &str, color: Color) {
		self.drawings.push((
			self.frame,
			EffectKind::Text {
				pos,
				text: text.to_string(),
				color,
			},
		));
	}
	fn draw_box_map(&mut self, top_left: Position, bottom_right: Position, color: Color) {
		self.drawings.push((
			self.frame,
			EffectKind::Box {
				top_left,
				bottom_right,
				color,
			},
		));
	}
}

/// Plays `frames` frames of `game` with `player`: calls [`on_start`](Player::on_start),
/// then [`on_frame`](Player::on_frame) and [`on_event`](Player::on_event) for every
/// finished unit on each frame, and finally [`on_end`](Player::on_end).
/// The game counts as won if the player still owns a resource depot.
pub fn run_simulation(player: &mut dyn Player, game: &mut SimGame, frames: u32) -> BWResult<()> {
	player.on_start(game)?;
	let text = game.chat.last().cloned();
	if let Some(text) = text {
		player.on_event(game, Event::SendText(text))?;
	}
	for _ in 0..frames {
		player.on_frame(game)?;
		for event in game.advance() {
			player.on_event(game, event)?;
		}
	}
	let won = !game.self_units().resource_depots().is_empty();
	player.on_end(GameResult::from(won))
}
