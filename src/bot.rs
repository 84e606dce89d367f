//! [`Bot`] struct, its configuration and the per-frame decision loop.

use crate::{
	action::{ErrorCode, Order},
	constants::{
		BARRACKS_LIMIT, BARRACKS_MARGIN, COMMAND_OPTIMIZATION_LEVEL, GREETING, SUPPLY_CHECK_COOLDOWN,
		SUPPLY_OVERLAY_PADDING,
	},
	debug::{Color, Debugger, PendingEffect},
	game::Game,
	geometry::Position,
	ids::UnitTypeId,
	player::{GameResult, PlayerId},
	unit::{Unit, UnitStatus},
	Event,
};
use bw_macro::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Decision tree followed by workers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromStr)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Strategy {
	/// Harvest, train workers and fix supply blocks.
	Basic,
	/// [`Basic`](Self::Basic) plus a single production structure ordered from a mining worker.
	Barracks,
}
impl Default for Strategy {
	fn default() -> Self {
		Strategy::Basic
	}
}

/// Options of the one-shot structure order used by [`Strategy::Barracks`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BarracksGate {
	/// Structure to order. [Default: `TerranBarracks`]
	pub structure: UnitTypeId,
	/// Maximum number of orders during the game. [Default: `1`]
	pub limit: u32,
	/// Minerals required on top of the structure's price. [Default: `50`]
	pub margin: u32,
}
impl Default for BarracksGate {
	fn default() -> Self {
		Self {
			structure: UnitTypeId::TerranBarracks,
			limit: BARRACKS_LIMIT,
			margin: BARRACKS_MARGIN,
		}
	}
}

/// Settings of [`Bot`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BotConfig {
	/// [Default: `Basic`]
	pub strategy: Strategy,
	/// Chat message sent on game start. [Default: `"Hello world!"`]
	pub greeting: String,
	/// Command grouping level requested from the host on start. [Default: `2`]
	pub command_optimization_level: u32,
	/// Minimum frames between two supply block fixes. [Default: `400`]
	pub supply_check_cooldown: u32,
	/// Frames the planned supply structure box stays on screen after its build time. [Default: `100`]
	pub supply_overlay_padding: u32,
	pub barracks: BarracksGate,
}
impl BotConfig {
	pub fn new(strategy: Strategy) -> Self {
		Self {
			strategy,
			..Default::default()
		}
	}
	pub fn configured(strategy: Strategy, greeting: Option<&str>, barracks: BarracksGate) -> Self {
		Self {
			strategy,
			greeting: greeting.unwrap_or(GREETING).to_string(),
			barracks,
			..Default::default()
		}
	}
}
impl Default for BotConfig {
	fn default() -> Self {
		Self {
			strategy: Default::default(),
			greeting: GREETING.to_string(),
			command_optimization_level: COMMAND_OPTIMIZATION_LEVEL,
			supply_check_cooldown: SUPPLY_CHECK_COOLDOWN,
			supply_overlay_padding: SUPPLY_OVERLAY_PADDING,
			barracks: Default::default(),
		}
	}
}

/// Everything the agent remembers between frames.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AgentState {
	/// Gated structures ordered so far. Never decreases.
	pub barracks_count: u32,
	/// Frame of the last attempt to fix a supply block.
	pub last_supply_check: u32,
}

/// Order sent to the host and whether it was accepted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Issued {
	pub order: Order,
	pub accepted: bool,
}

/// Result of one pass of [`run_frame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
	pub state: AgentState,
	/// Overlays to hand over to [`Debugger`].
	pub effects: Vec<PendingEffect>,
	pub orders: Vec<Issued>,
}
impl Frame {
	fn unchanged(state: AgentState) -> Self {
		Self {
			state,
			effects: Vec::new(),
			orders: Vec::new(),
		}
	}
}

/// Runs decision loop over all your units once.
///
/// Does nothing when the game is paused, there's no controlled player, or the current
/// frame is not a multiple of latency frames (the host takes one command batch per latency window).
pub fn run_frame<G: Game + ?Sized>(game: &mut G, state: AgentState, config: &BotConfig) -> Frame {
	if game.is_paused() {
		return Frame::unchanged(state);
	}
	let player = match game.self_player() {
		Some(player) => player,
		None => return Frame::unchanged(state),
	};
	let now = game.frame_count();
	let latency = game.latency_frames().max(1);
	if now % latency != 0 {
		return Frame::unchanged(state);
	}

	let units = game.self_units();
	let mut decider = Decider {
		game,
		config,
		player,
		now,
		latency,
		out: Frame::unchanged(state),
	};
	for u in &units {
		decider.unit(u);
	}
	decider.out
}

struct Decider<'a, G: Game + ?Sized> {
	game: &'a mut G,
	config: &'a BotConfig,
	player: PlayerId,
	now: u32,
	latency: u32,
	out: Frame,
}
impl<G: Game + ?Sized> Decider<'_, G> {
	fn unit(&mut self, u: &Unit) {
		let status = u.status();
		if !status.is_eligible() {
			trace!("Skipping {} {}: {:?}", u.type_id.name(), u.tag, status);
			return;
		}
		if u.is_worker() {
			self.worker(u, status);
		} else if u.is_resource_depot() && status.is_idle() {
			self.depot(u);
		}
	}

	fn worker(&mut self, u: &Unit, status: UnitStatus) {
		if status.is_idle() {
			if u.is_carrying_resource() {
				self.issue(Order::ReturnCargo { unit: u.tag });
			} else if !u.has_power_up() {
				self.gather(u);
			}
		} else if self.config.strategy == Strategy::Barracks {
			self.barracks_gate(u);
		}
	}

	fn gather(&mut self, u: &Unit) {
		let target = match self.game.closest_unit(u, &|r| r.is_mineral_field() || r.is_refinery()) {
			Some(target) => target,
			None => {
				// The host rejects a gather without target the same way.
				let error = ErrorCode::UnitDoesNotExist;
				warn!("Nothing to harvest for worker {}: {}", u.tag, error);
				self.game.print(&error.to_string());
				return;
			}
		};
		if !self.issue(Order::Gather {
			unit: u.tag,
			target: target.tag,
		}) {
			let error = self.game.last_error();
			self.game.print(&error.to_string());
		}
	}

	fn depot(&mut self, u: &Unit) {
		let worker = match u.race().worker() {
			Some(worker) => worker,
			None => return,
		};
		if self.issue(Order::Train {
			unit: u.tag,
			unit_type: worker,
		}) {
			return;
		}

		let error = self.game.last_error();
		self.out.effects.push(PendingEffect::text(
			u.position,
			error.to_string(),
			Color::White,
			self.now,
			self.latency,
		));
		if error == ErrorCode::InsufficientSupply {
			self.supply_block(u);
		}
	}

	fn supply_block(&mut self, depot: &Unit) {
		let provider = match depot.race().supply_provider() {
			Some(provider) => provider,
			None => return,
		};
		let last_check = self.out.state.last_supply_check;
		if last_check.saturating_add(self.config.supply_check_cooldown) >= self.now {
			trace!("Supply block fix on cooldown since frame {}", last_check);
			return;
		}
		if self.game.incomplete_unit_count(provider) != 0 {
			return;
		}
		// Updated before searching, so a failed search also waits for the cooldown.
		self.out.state.last_supply_check = self.now;

		let builder_type = match provider.what_builds() {
			Some(builder_type) => builder_type,
			None => return,
		};
		let player = self.player;
		let builder = self.game.closest_unit(depot, &|b| {
			b.type_id == builder_type && (b.is_idle || b.is_gathering_minerals) && b.is_owned_by(player)
		});
		let builder = match builder {
			Some(builder) => builder,
			None => {
				debug!("No {} available to build {}", builder_type.name(), provider.name());
				return;
			}
		};
		let location = match self.game.build_location(provider, builder.tile_position) {
			Some(location) if location.is_valid() => location,
			_ => {
				debug!("No place for {} near {}", provider.name(), builder.tile_position);
				return;
			}
		};

		self.out.effects.push(PendingEffect::boxed(
			Position::from(location),
			Position::from(location + provider.tile_size()),
			Color::Blue,
			self.now,
			provider.build_time().saturating_add(self.config.supply_overlay_padding),
		));
		self.issue(Order::Build {
			unit: builder.tag,
			unit_type: provider,
			location,
		});
	}

	fn barracks_gate(&mut self, u: &Unit) {
		let gate = self.config.barracks;
		if self.out.state.barracks_count >= gate.limit || !u.is_gathering_minerals {
			return;
		}
		let structure = gate.structure;
		let minerals = structure.mineral_price().saturating_add(gate.margin);
		if self.game.minerals() < minerals || self.game.gas() < structure.gas_price() {
			return;
		}

		match self.game.build_location(structure, u.tile_position) {
			Some(location) if location.is_valid() => {
				self.issue(Order::Build {
					unit: u.tag,
					unit_type: structure,
					location,
				});
			}
			_ => debug!("No place for {} near {}", structure.name(), u.tile_position),
		}
		// Counted even if the host rejects the order, so a failed build uses up the gate.
		self.out.state.barracks_count += 1;
		info!(
			"{} ordered by worker {} ({}/{})",
			structure.name(),
			u.tag,
			self.out.state.barracks_count,
			gate.limit
		);
	}

	fn issue(&mut self, order: Order) -> bool {
		let accepted = self.game.issue(order);
		if !accepted {
			warn!("Order \"{}\" rejected: {}", order, self.game.last_error());
		}
		self.out.orders.push(Issued { order, accepted });
		accepted
	}
}

/// Main bot struct.
/// Structs with `#[bot]` attribute will get all it's fields and methods
/// through `Deref` and `DerefMut` traits.
#[derive(Debug, Default)]
pub struct Bot {
	pub config: BotConfig,
	pub state: AgentState,
	/// Overlays waiting to be drawn.
	pub debug: Debugger,
}

impl Bot {
	pub fn new(config: BotConfig) -> Self {
		Self {
			config,
			..Default::default()
		}
	}
	/// Greets players, prints map name and sets command optimization level.
	pub fn start<G: Game + ?Sized>(&mut self, game: &mut G) {
		self.state = AgentState::default();
		self.debug.clear();

		game.send_text(&self.config.greeting);
		let map = game.map_name();
		game.print(&format!("The map is {}!", map));
		game.set_command_optimization_level(self.config.command_optimization_level);
		info!("Started on {} with {:?} strategy", map, self.config.strategy);
	}
	/// Runs decision loop, then draws overlays live on this frame.
	/// Returns orders issued on this frame.
	pub fn step<G: Game + ?Sized>(&mut self, game: &mut G) -> Vec<Issued> {
		let Frame { state, effects, orders } = run_frame(game, self.state, &self.config);
		self.state = state;
		self.debug.schedule(effects);
		let now = game.frame_count();
		self.debug.render(game, now);
		orders
	}
	/// Reports events which the host prints in its console, ignores the rest.
	pub fn handle_event<G: Game + ?Sized>(&mut self, game: &mut G, event: &Event) {
		match event {
			Event::NukeDetect(target) => {
				if target.is_valid() {
					game.print(&format!("Nuclear Launch Detected at {}", target));
				}
			}
			Event::SaveGame(name) => game.print(&format!("The game was saved to \"{}\"", name)),
			Event::UnitComplete(u) => game.print(&format!("{} is completed.", u.type_id.name())),
			Event::ReceiveText(player, text) => debug!("Player {}: {}", player, text),
			Event::PlayerLeft(player) => info!("Player {} left the game", player),
			event => trace!("{:?}", event),
		}
	}
	pub fn end(&mut self, result: GameResult) {
		info!(
			"Game over: {:?} (structures ordered: {}, last supply check: {})",
			result, self.state.barracks_count, self.state.last_supply_check
		);
	}
}
