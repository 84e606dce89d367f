use rust_bw::{
	prelude::*,
	sim::{run_simulation, SimGame},
};

#[derive(Default)]
struct Outcome(Option<GameResult>);
impl Player for Outcome {
	fn on_end(&mut self, result: GameResult) -> BWResult<()> {
		self.0 = Some(result);
		Ok(())
	}
}

fn started() -> (SimGame, BasicBot) {
	let mut game = SimGame::melee(Race::Terran, 3);
	let mut bot = BasicBot::default();
	bot.on_start(&mut game).unwrap();
	(game, bot)
}

#[test]
fn start_greets_and_sets_up_host() {
	let (game, bot) = started();
	assert_eq!(game.chat, vec!["Hello world!".to_string()]);
	assert_eq!(game.console, vec!["The map is Simulated!".to_string()]);
	assert_eq!(game.optimization_level, 2);
	assert_eq!(bot.state, AgentState::default());
}

#[test]
fn custom_greeting() {
	let mut game = SimGame::new(0);
	let config = BotConfig::configured(Strategy::Basic, Some("gl hf"), Default::default());
	let mut bot = BasicBot::new(config);
	bot.on_start(&mut game).unwrap();
	assert_eq!(game.chat, vec!["gl hf".to_string()]);
}

#[test]
fn restart_resets_state() {
	let (mut game, mut bot) = started();
	bot.state.barracks_count = 1;
	bot.state.last_supply_check = 800;
	bot.on_start(&mut game).unwrap();
	assert_eq!(bot.state, AgentState::default());
}

#[test]
fn nuke_detect_prints_visible_target() {
	let (mut game, mut bot) = started();
	game.console.clear();
	bot.on_event(&mut game, Event::NukeDetect(Position::new(10, 20))).unwrap();
	bot.on_event(&mut game, Event::NukeDetect(Position::INVALID)).unwrap();
	bot.on_event(&mut game, Event::NukeDetect(Position::NONE)).unwrap();
	assert_eq!(game.console, vec!["Nuclear Launch Detected at (10, 20)".to_string()]);
}

#[test]
fn save_game_prints_name() {
	let (mut game, mut bot) = started();
	game.console.clear();
	bot.on_event(&mut game, Event::SaveGame("quick".to_string())).unwrap();
	assert_eq!(game.console, vec!["The game was saved to \"quick\"".to_string()]);
}

#[test]
fn unit_complete_prints_type() {
	let (mut game, mut bot) = started();
	game.console.clear();
	let scv = game.self_units().workers().first().cloned().unwrap();
	bot.on_event(&mut game, Event::UnitComplete(scv)).unwrap();
	assert_eq!(game.console, vec!["Terran_SCV is completed.".to_string()]);
}

#[test]
fn other_events_are_quiet() {
	let (mut game, mut bot) = started();
	game.console.clear();
	let depot = game.self_units().resource_depots().first().cloned().unwrap();
	for event in vec![
		Event::SendText("hi".to_string()),
		Event::ReceiveText(1, "gg".to_string()),
		Event::PlayerLeft(1),
		Event::UnitCreate(depot.clone()),
		Event::UnitDestroy(depot.clone()),
		Event::UnitMorph(depot.clone()),
		Event::UnitShow(depot.clone()),
		Event::UnitHide(depot.clone()),
		Event::UnitDiscover(depot.clone()),
		Event::UnitEvade(depot.clone()),
		Event::UnitRenegade(depot),
	] {
		bot.on_event(&mut game, event).unwrap();
	}
	assert!(game.console.is_empty());
	assert!(game.orders.is_empty());
	bot.on_end(GameResult::Defeat).unwrap();
}

#[test]
fn simulated_game_grows_economy() {
	let mut game = SimGame::melee(Race::Terran, 42);
	let mut bot = BasicBot::default();
	run_simulation(&mut bot, &mut game, 3000).unwrap();

	assert!(game.self_units().workers().len() > 4);
	assert!(game.console.iter().any(|line| line == "Terran_SCV is completed."));
	assert!(bot.active_frames > 0);
	assert_eq!(bot.state.barracks_count, 0);
	assert!(game.units().of_type(UnitTypeId::TerranBarracks).is_empty());
}

#[test]
fn simulated_game_gets_one_barracks() {
	let mut game = SimGame::melee(Race::Terran, 42);
	let mut bot = BasicBot::new(BotConfig::new(Strategy::Barracks));
	run_simulation(&mut bot, &mut game, 10000).unwrap();

	assert_eq!(bot.state.barracks_count, 1);
	assert!(game.units().of_type(UnitTypeId::TerranBarracks).len() <= 1);
}

#[test]
fn supply_block_gets_fixed() {
	let mut game = SimGame::melee(Race::Protoss, 5);
	let mut bot = BasicBot::default();
	run_simulation(&mut bot, &mut game, 8000).unwrap();

	assert!(bot.state.last_supply_check > 0);
	assert!(!game.units().of_type(UnitTypeId::ProtossPylon).is_empty());
}

#[test]
fn zerg_gets_out_of_supply_block() {
	let mut game = SimGame::melee(Race::Zerg, 9);
	let mut bot = BasicBot::default();
	run_simulation(&mut bot, &mut game, 8000).unwrap();

	assert!(bot.state.last_supply_check > 0);
	assert!(game.self_units().of_type(UnitTypeId::ZergOverlord).len() >= 2);
	assert!(game.self_units().workers().len() > 9);
}

#[test]
fn result_depends_on_remaining_depot() {
	let mut outcome = Outcome::default();
	run_simulation(&mut outcome, &mut SimGame::melee(Race::Terran, 0), 10).unwrap();
	assert_eq!(outcome.0, Some(GameResult::Victory));

	let mut outcome = Outcome::default();
	run_simulation(&mut outcome, &mut SimGame::new(0), 10).unwrap();
	assert_eq!(outcome.0, Some(GameResult::Defeat));
}
