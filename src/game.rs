//! Interface of the host engine the agent runs inside.

use crate::{
	action::{ErrorCode, Order},
	debug::Color,
	geometry::{Position, TilePosition},
	ids::UnitTypeId,
	player::PlayerId,
	unit::Unit,
	units::Units,
};

/// Queries and commands of the host game.
///
/// Everything returned is a snapshot valid only for the current frame.
/// Commands return `true` if the host accepted them, otherwise the reason
/// is available through [`last_error`](Self::last_error).
pub trait Game {
	fn is_paused(&self) -> bool;
	/// Player controlled by the agent or `None` in replays.
	fn self_player(&self) -> Option<PlayerId>;
	fn frame_count(&self) -> u32;
	/// Frames before issued commands are processed by the host.
	fn latency_frames(&self) -> u32;
	fn map_name(&self) -> String;
	/// All units owned by the controlled player, in host order.
	fn self_units(&self) -> Units;
	/// Unit closest to `from` (excluding `from` itself) which passes `filter`.
	fn closest_unit(&self, from: &Unit, filter: &dyn Fn(&Unit) -> bool) -> Option<Unit>;
	/// Error of the last rejected command.
	fn last_error(&self) -> ErrorCode;
	/// Valid place for a structure of given type near `near` or `None` if nothing fits.
	fn build_location(&self, unit_type: UnitTypeId, near: TilePosition) -> Option<TilePosition>;
	/// Number of your units of given type which are still in production.
	fn incomplete_unit_count(&self, unit_type: UnitTypeId) -> u32;
	fn minerals(&self) -> u32;
	fn gas(&self) -> u32;

	/// Sends chat message to all players.
	fn send_text(&mut self, text: &str);
	/// Prints text to the host's output console.
	fn print(&mut self, text: &str);
	fn set_command_optimization_level(&mut self, level: u32);
	fn issue(&mut self, order: Order) -> bool;
	fn draw_text_map(&mut self, pos: Position, text: &str, color: Color);
	fn draw_box_map(&mut self, top_left: Position, bottom_right: Position, color: Color);
}
