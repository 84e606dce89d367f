//! Time-boxed on-screen diagnostics.
//!
//! Decision code only produces [`PendingEffect`] values,
//! [`Debugger`] keeps them and draws the live ones on every frame.

use crate::{game::Game, geometry::Position};
use std::mem;

/// Colors supported by the host's map drawing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
	White,
	Blue,
}

/// Shape drawn in map coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectKind {
	Text {
		pos: Position,
		text: String,
		color: Color,
	},
	Box {
		top_left: Position,
		bottom_right: Position,
		color: Color,
	},
}

/// Overlay requested by the decision loop.
/// Drawn on every frame before `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEffect {
	pub kind: EffectKind,
	pub expires_at: u32,
}
impl PendingEffect {
	/// Text shown for `frames` frames starting with `now`.
	pub fn text(pos: Position, text: impl Into<String>, color: Color, now: u32, frames: u32) -> Self {
		Self {
			kind: EffectKind::Text {
				pos,
				text: text.into(),
				color,
			},
			expires_at: now.saturating_add(frames),
		}
	}
	/// Box outline shown for `frames` frames starting with `now`.
	pub fn boxed(top_left: Position, bottom_right: Position, color: Color, now: u32, frames: u32) -> Self {
		Self {
			kind: EffectKind::Box {
				top_left,
				bottom_right,
				color,
			},
			expires_at: now.saturating_add(frames),
		}
	}
	#[inline]
	pub fn is_live(&self, frame: u32) -> bool {
		frame < self.expires_at
	}
}

/// Keeps scheduled overlays and renders them through the host.
#[derive(Debug, Default)]
pub struct Debugger {
	effects: Vec<PendingEffect>,
}
impl Debugger {
	pub fn schedule<I: IntoIterator<Item = PendingEffect>>(&mut self, effects: I) {
		self.effects.extend(effects);
	}
	/// Scheduled overlays, including ones that expire this frame.
	pub fn effects(&self) -> &[PendingEffect] {
		&self.effects
	}
	pub fn clear(&mut self) {
		self.effects.clear();
	}
	/// Draws every overlay live on `frame` and drops expired ones.
	/// Returns number of drawn shapes.
	pub fn render<G: Game + ?Sized>(&mut self, game: &mut G, frame: u32) -> usize {
		let (live, expired): (Vec<_>, Vec<_>) = mem::take(&mut self.effects)
			.into_iter()
			.partition(|e| e.is_live(frame));
		if !expired.is_empty() {
			trace!("Dropped {} expired overlays on frame {}", expired.len(), frame);
		}
		for effect in &live {
			match &effect.kind {
				EffectKind::Text { pos, text, color } => game.draw_text_map(*pos, text, *color),
				EffectKind::Box {
					top_left,
					bottom_right,
					color,
				} => game.draw_box_map(*top_left, *bottom_right, *color),
			}
		}
		self.effects = live;
		self.effects.len()
	}
}
