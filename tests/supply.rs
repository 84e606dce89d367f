use rust_bw::{
	bot::{run_frame, Issued},
	debug::EffectKind,
	geometry::TilePosition,
	prelude::*,
	sim::SimGame,
};

/// Depot with one mining worker and no free supply, on frame 500.
fn supply_blocked(depot: UnitTypeId, worker: UnitTypeId) -> (SimGame, u64, u64) {
	let mut game = SimGame::new(0);
	game.latency = 10;
	game.frame = 500;
	game.minerals = 500;
	let depot = game.add_unit(depot, Position::new(1024, 1024));
	let worker = game.add_unit(worker, Position::new(1000, 1100));
	let u = game.unit_mut(worker).unwrap();
	u.is_idle = false;
	u.is_gathering_minerals = true;
	game.supply_used = game.supply_total;
	(game, depot, worker)
}

fn builds(orders: &[Issued]) -> Vec<(u64, UnitTypeId, TilePosition)> {
	orders
		.iter()
		.filter_map(|i| match i.order {
			Order::Build {
				unit,
				unit_type,
				location,
			} => Some((unit, unit_type, location)),
			_ => None,
		})
		.collect()
}

#[test]
fn orders_supply_depot_from_mining_worker() {
	let (mut game, cc, scv) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());

	assert_eq!(frame.state.last_supply_check, 500);
	assert_eq!(frame.orders[0], Issued {
		order: Order::Train {
			unit: cc,
			unit_type: UnitTypeId::TerranSCV
		},
		accepted: false
	});
	let location = TilePosition::new(33, 36);
	assert_eq!(builds(&frame.orders), vec![(scv, UnitTypeId::TerranSupplyDepot, location)]);
	assert!(frame.orders[1].accepted);

	assert_eq!(frame.effects.len(), 2);
	assert_eq!(frame.effects[0].expires_at, 510);
	assert_eq!(frame.effects[1].expires_at, 500 + 600 + 100);
	assert_eq!(frame.effects[1].kind, EffectKind::Box {
		top_left: Position::new(1056, 1152),
		bottom_right: Position::new(1152, 1216),
		color: Color::Blue,
	});
	assert_eq!(game.incomplete_unit_count(UnitTypeId::TerranSupplyDepot), 1);
}

#[test]
fn pylon_box_matches_its_size_and_build_time() {
	let (mut game, ..) = supply_blocked(UnitTypeId::ProtossNexus, UnitTypeId::ProtossProbe);
	let mut config = BotConfig::default();
	config.supply_overlay_padding = 0;
	let frame = run_frame(&mut game, AgentState::default(), &config);

	let (_, provider, location) = builds(&frame.orders)[0];
	assert_eq!(provider, UnitTypeId::ProtossPylon);
	assert_eq!(frame.effects[1].expires_at, 500 + 450);
	assert_eq!(frame.effects[1].kind, EffectKind::Box {
		top_left: Position::from(location),
		bottom_right: Position::from(location) + Position::new(64, 64),
		color: Color::Blue,
	});
}

#[test]
fn waits_for_cooldown_between_fixes() {
	let (mut game, ..) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	game.set_placement(UnitTypeId::TerranSupplyDepot, None);
	let config = BotConfig::default();

	let frame = run_frame(&mut game, AgentState::default(), &config);
	assert_eq!(frame.state.last_supply_check, 500);
	assert!(builds(&frame.orders).is_empty());
	let mut state = frame.state;

	for now in [600, 900] {
		game.frame = now;
		state = run_frame(&mut game, state, &config).state;
		assert_eq!(state.last_supply_check, 500);
	}

	game.frame = 910;
	game.set_placement(UnitTypeId::TerranSupplyDepot, Some(TilePosition::new(10, 10)));
	let frame = run_frame(&mut game, state, &config);
	assert_eq!(frame.state.last_supply_check, 910);
	assert_eq!(builds(&frame.orders).len(), 1);
}

#[test]
fn first_check_needs_cooldown_from_game_start() {
	let (mut game, ..) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	game.frame = 400;
	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	assert_eq!(frame.state.last_supply_check, 0);
	assert!(builds(&frame.orders).is_empty());
}

#[test]
fn skipped_while_supply_structure_is_in_production() {
	let (mut game, ..) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	let depot = game.add_unit(UnitTypeId::TerranSupplyDepot, Position::new(800, 800));
	game.unit_mut(depot).unwrap().is_completed = false;
	game.supply_used = game.supply_total;

	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	assert_eq!(frame.state.last_supply_check, 0);
	assert_eq!(frame.orders.len(), 1);
	assert_eq!(frame.effects.len(), 1);
}

#[test]
fn check_is_spent_without_builder() {
	let (mut game, _, scv) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	let u = game.unit_mut(scv).unwrap();
	u.is_gathering_minerals = false;
	u.is_gathering_gas = true;

	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	assert_eq!(frame.state.last_supply_check, 500);
	assert!(builds(&frame.orders).is_empty());
	assert_eq!(frame.effects.len(), 1);
}

#[test]
fn builder_must_be_own_worker() {
	let (mut game, _, scv) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	game.add_foreign(1, UnitTypeId::TerranSCV, Position::new(1024, 1060));
	game.add_unit(UnitTypeId::ProtossProbe, Position::new(1024, 1070));
	game.supply_used = game.supply_total;

	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	let built = builds(&frame.orders);
	assert_eq!(built.len(), 1);
	assert_eq!(built[0].0, scv);
}

#[test]
fn idle_worker_can_build() {
	let (mut game, _, scv) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	let builder = game.add_unit(UnitTypeId::TerranSCV, Position::new(1024, 1070));
	game.supply_used = game.supply_total;
	// Keep the idle worker away from the decision loop.
	game.unit_mut(builder).unwrap().power_up = Some(1);

	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	let built = builds(&frame.orders);
	assert_eq!(built.len(), 1);
	assert_eq!(built[0].0, builder);
	assert!(!game.unit(scv).unwrap().is_constructing);
}

#[test]
fn invalid_location_is_not_used() {
	let (mut game, ..) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	game.set_placement(UnitTypeId::TerranSupplyDepot, Some(TilePosition::INVALID));
	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());
	assert_eq!(frame.state.last_supply_check, 500);
	assert!(builds(&frame.orders).is_empty());
	assert_eq!(frame.effects.len(), 1);
}

#[test]
fn overlays_stay_for_their_duration() {
	let (mut game, cc, _) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	game.latency = 20;
	game.frame = 1000;
	let mut bot = Bot::new(BotConfig::default());
	bot.step(&mut game);
	assert_eq!(game.drawings_on(1000).len(), 2);

	for now in 1001..1020 {
		game.frame = now;
		assert!(bot.step(&mut game).is_empty());
		assert_eq!(game.drawings_on(now).len(), 2);
	}

	game.unit_mut(cc).unwrap().is_idle = false;
	for now in [1020, 1699] {
		game.frame = now;
		bot.step(&mut game);
		assert!(matches!(game.drawings_on(now)[..], [EffectKind::Box { .. }]));
	}
	game.frame = 1700;
	bot.step(&mut game);
	assert!(game.drawings_on(1700).is_empty());
	assert!(bot.debug.effects().is_empty());
}

#[test]
fn huge_padding_keeps_box_forever() {
	let (mut game, ..) = supply_blocked(UnitTypeId::TerranCommandCenter, UnitTypeId::TerranSCV);
	let mut config = BotConfig::default();
	config.supply_overlay_padding = u32::MAX;
	let frame = run_frame(&mut game, AgentState::default(), &config);
	assert_eq!(builds(&frame.orders).len(), 1);
	assert_eq!(frame.effects[1].expires_at, u32::MAX);
}

#[test]
fn zerg_morphs_overlord_from_larva() {
	let (mut game, ..) = supply_blocked(UnitTypeId::ZergHatchery, UnitTypeId::ZergDrone);
	let larva = game.add_unit(UnitTypeId::ZergLarva, Position::new(1024, 1090));
	let frame = run_frame(&mut game, AgentState::default(), &BotConfig::default());

	let location = TilePosition::new(34, 36);
	assert_eq!(builds(&frame.orders), vec![(larva, UnitTypeId::ZergOverlord, location)]);
	assert!(frame.orders[1].accepted);
	assert_eq!(frame.effects[1].expires_at, 500 + 600 + 100);
	assert_eq!(frame.effects[1].kind, EffectKind::Box {
		top_left: Position::new(1088, 1152),
		bottom_right: Position::new(1120, 1184),
		color: Color::Blue,
	});
	assert!(game.unit(larva).is_none());
	assert_eq!(game.incomplete_unit_count(UnitTypeId::ZergOverlord), 1);
}
