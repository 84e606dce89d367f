//! Frame-reactive agent for StarCraft: Brood War.
//!
//! The host engine calls [`Player`] callbacks, the agent reads unit snapshots through
//! [`Game`](game::Game) and answers with orders: idle workers harvest or return cargo,
//! idle resource depots train workers, and supply blocks are fixed with a new supply structure.
#![deny(rustdoc::broken_intra_doc_links)]

extern crate self as rust_bw;
#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate log;
pub extern crate bw_macro;

/// The most frequent used items and various traits here.
/// Prefered usage: `use rust_bw::prelude::*;`.
pub mod prelude {
	pub use crate::{
		action::{ErrorCode, Order},
		agent::BasicBot,
		bot::{AgentState, BarracksGate, Bot, BotConfig, Strategy},
		bw_macro::{bot, bot_new},
		debug::{Color, PendingEffect},
		distance::*,
		game::Game,
		geometry::{Position, TilePosition},
		ids::UnitTypeId,
		player::{GameResult, PlayerId, Race},
		unit::{Unit, UnitStatus},
		units::Units,
		BWResult, Event, Player,
	};
}

pub mod action;
pub mod agent;
pub mod bot;
pub mod constants;
pub mod debug;
pub mod distance;
pub mod game;
pub mod game_data;
pub mod geometry;
pub mod ids;
pub mod player;
pub mod sim;
pub mod unit;
pub mod units;

use game::Game;
use geometry::Position;
use player::{GameResult, PlayerId};
use std::error::Error;
use unit::Unit;

pub type BWResult<T> = Result<T, Box<dyn Error>>;

/// Events that happen in game.
/// Passed to [`on_event`](Player::on_event).
#[derive(Debug, Clone)]
pub enum Event {
	/// You sent a chat message.
	SendText(String),
	/// Another player sent a chat message.
	ReceiveText(PlayerId, String),
	PlayerLeft(PlayerId),
	/// Nuclear launch was detected, target may be invalid if it's not visible.
	NukeDetect(Position),
	UnitDiscover(Unit),
	UnitEvade(Unit),
	UnitShow(Unit),
	UnitHide(Unit),
	UnitCreate(Unit),
	UnitDestroy(Unit),
	UnitMorph(Unit),
	/// Unit changed owner.
	UnitRenegade(Unit),
	/// Game was saved with given name.
	SaveGame(String),
	UnitComplete(Unit),
}

/// Trait that bots must implement.
pub trait Player {
	/// Called once on game start.
	fn on_start(&mut self, _game: &mut dyn Game) -> BWResult<()> {
		Ok(())
	}
	/// Called on every frame. (Main logic of the bot should be here)
	fn on_frame(&mut self, _game: &mut dyn Game) -> BWResult<()> {
		Ok(())
	}
	/// Called once when the game ends with a result for your bot.
	fn on_end(&mut self, _result: GameResult) -> BWResult<()> {
		Ok(())
	}
	/// Called when different events happen.
	fn on_event(&mut self, _game: &mut dyn Game, _event: Event) -> BWResult<()> {
		Ok(())
	}
}
