//! Ready-to-use [`Player`] driving [`Bot`] with the given [`BotConfig`].

use crate::{
	bot::{Bot, BotConfig, Issued},
	bw_macro::{bot, bot_new},
	game::Game,
	player::GameResult,
	BWResult, Event, Player,
};

#[bot]
#[derive(Debug)]
pub struct BasicBot {
	/// Orders issued on the last frame.
	pub last_orders: Vec<Issued>,
	/// Frames on which the decision loop issued at least one order.
	pub active_frames: u32,
}

impl BasicBot {
	#[bot_new(config)]
	pub fn new(config: BotConfig) -> Self {
		Self {
			last_orders: Vec::new(),
			active_frames: 0,
		}
	}
	/// Underlying agent.
	pub fn bot(&self) -> &Bot {
		self
	}
}
impl Default for BasicBot {
	fn default() -> Self {
		Self::new(BotConfig::default())
	}
}

impl Player for BasicBot {
	fn on_start(&mut self, game: &mut dyn Game) -> BWResult<()> {
		self.start(game);
		self.active_frames = 0;
		Ok(())
	}
	fn on_frame(&mut self, game: &mut dyn Game) -> BWResult<()> {
		self.last_orders = self.step(game);
		if !self.last_orders.is_empty() {
			self.active_frames += 1;
		}
		Ok(())
	}
	fn on_end(&mut self, result: GameResult) -> BWResult<()> {
		self.end(result);
		Ok(())
	}
	fn on_event(&mut self, game: &mut dyn Game, event: Event) -> BWResult<()> {
		self.handle_event(game, &event);
		Ok(())
	}
}
