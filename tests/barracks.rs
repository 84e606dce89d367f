use rust_bw::{
	bot::{run_frame, Frame},
	geometry::TilePosition,
	prelude::*,
	sim::SimGame,
};

fn mining_scv(game: &mut SimGame, position: Position) -> u64 {
	let scv = game.add_unit(UnitTypeId::TerranSCV, position);
	let u = game.unit_mut(scv).unwrap();
	u.is_idle = false;
	u.is_gathering_minerals = true;
	scv
}

fn barracks_game(minerals: u32) -> (SimGame, u64) {
	let mut game = SimGame::new(0);
	game.minerals = minerals;
	let scv = mining_scv(&mut game, Position::new(320, 320));
	(game, scv)
}

fn gated() -> BotConfig {
	BotConfig::new(Strategy::Barracks)
}

fn build_orders(frame: &Frame) -> usize {
	frame
		.orders
		.iter()
		.filter(|i| matches!(i.order, Order::Build { .. }))
		.count()
}

#[test]
fn mining_worker_orders_barracks() {
	let (mut game, scv) = barracks_game(200);
	let frame = run_frame(&mut game, AgentState::default(), &gated());

	assert_eq!(frame.state.barracks_count, 1);
	assert_eq!(frame.orders.len(), 1);
	assert!(frame.orders[0].accepted);
	assert_eq!(frame.orders[0].order, Order::Build {
		unit: scv,
		unit_type: UnitTypeId::TerranBarracks,
		location: TilePosition::new(12, 12),
	});
	assert_eq!(game.minerals, 50);
}

#[test]
fn needs_price_plus_margin() {
	let (mut game, _) = barracks_game(199);
	let frame = run_frame(&mut game, AgentState::default(), &gated());
	assert_eq!(frame.state.barracks_count, 0);
	assert!(frame.orders.is_empty());
}

#[test]
fn basic_strategy_never_builds() {
	let (mut game, _) = barracks_game(1000);
	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	assert_eq!(frame.state.barracks_count, 0);
	assert!(frame.orders.is_empty());
}

#[test]
fn only_mineral_gatherers_qualify() {
	let (mut game, scv) = barracks_game(1000);
	let u = game.unit_mut(scv).unwrap();
	u.is_gathering_minerals = false;
	u.is_gathering_gas = true;
	let frame = run_frame(&mut game, AgentState::default(), &gated());
	assert_eq!(frame.state.barracks_count, 0);

	// Idle worker goes mining instead.
	let field = game.add_neutral(UnitTypeId::MineralField, Position::new(320, 400));
	let u = game.unit_mut(scv).unwrap();
	u.is_gathering_gas = false;
	u.is_idle = true;
	let frame = run_frame(&mut game, AgentState::default(), &gated());
	assert_eq!(frame.state.barracks_count, 0);
	assert_eq!(frame.orders[0].order, Order::Gather { unit: scv, target: field });
}

#[test]
fn ordered_at_most_once() {
	let mut game = SimGame::new(0);
	game.minerals = 1000;
	mining_scv(&mut game, Position::new(320, 320));
	mining_scv(&mut game, Position::new(640, 320));
	let config = gated();

	let mut state = AgentState::default();
	let mut built = 0;
	for now in (0..20).map(|f| f * 2) {
		game.frame = now;
		let frame = run_frame(&mut game, state, &config);
		built += build_orders(&frame);
		state = frame.state;
	}
	assert_eq!(built, 1);
	assert_eq!(state.barracks_count, 1);
}

#[test]
fn rejected_order_still_counts() {
	let (mut game, _) = barracks_game(200);
	game.rejecting = Some(ErrorCode::UnbuildableLocation);
	let frame = run_frame(&mut game, AgentState::default(), &gated());
	assert_eq!(frame.state.barracks_count, 1);
	assert!(!frame.orders[0].accepted);

	game.rejecting = None;
	game.frame = 2;
	let frame = run_frame(&mut game, frame.state, &gated());
	assert_eq!(frame.state.barracks_count, 1);
	assert!(frame.orders.is_empty());
}

#[test]
fn missing_location_still_counts() {
	let (mut game, _) = barracks_game(200);
	game.set_placement(UnitTypeId::TerranBarracks, None);
	let frame = run_frame(&mut game, AgentState::default(), &gated());
	assert_eq!(frame.state.barracks_count, 1);
	assert!(frame.orders.is_empty());
}

#[test]
fn gate_is_configurable() {
	let mut game = SimGame::new(0);
	game.minerals = 300;
	for x in [320, 640, 960] {
		let probe = game.add_unit(UnitTypeId::ProtossProbe, Position::new(x, 320));
		let u = game.unit_mut(probe).unwrap();
		u.is_idle = false;
		u.is_gathering_minerals = true;
	}
	let config = BotConfig::configured(Strategy::Barracks, None, BarracksGate {
		structure: UnitTypeId::ProtossGateway,
		limit: 2,
		margin: 0,
	});
	let frame = run_frame(&mut game, AgentState::default(), &config);
	assert_eq!(frame.state.barracks_count, 2);
	assert_eq!(build_orders(&frame), 2);
	assert!(frame.orders.iter().all(|i| i.accepted));
	assert_eq!(game.incomplete_unit_count(UnitTypeId::ProtossGateway), 2);
}

#[test]
fn gas_price_is_checked() {
	let mut game = SimGame::new(0);
	game.minerals = 1000;
	let drone = game.add_unit(UnitTypeId::ZergDrone, Position::new(320, 320));
	let u = game.unit_mut(drone).unwrap();
	u.is_idle = false;
	u.is_gathering_minerals = true;
	let config = BotConfig::configured(Strategy::Barracks, None, BarracksGate {
		structure: UnitTypeId::ZergLair,
		..Default::default()
	});

	let frame = run_frame(&mut game, AgentState::default(), &config);
	assert_eq!(frame.state.barracks_count, 0);

	game.gas = 100;
	let frame = run_frame(&mut game, AgentState::default(), &config);
	assert_eq!(frame.state.barracks_count, 1);
}

#[test]
fn huge_margin_never_fires() {
	let (mut game, _) = barracks_game(u32::MAX - 1);
	let config = BotConfig::configured(Strategy::Barracks, None, BarracksGate {
		margin: u32::MAX,
		..Default::default()
	});
	let frame = run_frame(&mut game, AgentState::default(), &config);
	assert_eq!(frame.state.barracks_count, 0);
	assert!(frame.orders.is_empty());
}
