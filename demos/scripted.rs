use clap::{App, Arg};
use rust_bw::{
	prelude::*,
	sim::{run_simulation, SimGame},
};

fn main() {
	let app = App::new("scripted")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Plays a headless game against nobody and prints what the agent built")
		.arg(
			Arg::new("frames")
				.short('f')
				.long("frames")
				.takes_value(true)
				.default_value("10000")
				.help("Frames to simulate"),
		)
		.arg(
			Arg::new("latency")
				.short('l')
				.long("latency")
				.takes_value(true)
				.default_value("2")
				.help("Latency frames of the host"),
		)
		.arg(
			Arg::new("race")
				.short('r')
				.long("race")
				.takes_value(true)
				.default_value("Terran")
				.help("Race of the agent"),
		)
		.arg(
			Arg::new("strategy")
				.short('s')
				.long("strategy")
				.takes_value(true)
				.default_value("Basic")
				.help("Basic or Barracks"),
		)
		.arg(Arg::new("seed").long("seed").takes_value(true).default_value("0"))
		.get_matches();

	let frames = app
		.value_of("frames")
		.unwrap()
		.parse::<u32>()
		.expect("Can't parse frames");
	let latency = app
		.value_of("latency")
		.unwrap()
		.parse::<u32>()
		.expect("Can't parse latency");
	let race = app
		.value_of("race")
		.unwrap()
		.parse::<Race>()
		.expect("Can't parse race");
	let strategy = app
		.value_of("strategy")
		.unwrap()
		.parse::<Strategy>()
		.expect("Can't parse strategy");
	let seed = app
		.value_of("seed")
		.unwrap()
		.parse::<u64>()
		.expect("Can't parse seed");

	let mut game = SimGame::melee(race, seed);
	game.latency = latency;
	let mut bot = BasicBot::new(BotConfig::new(strategy));

	if let Err(e) = run_simulation(&mut bot, &mut game, frames) {
		eprintln!("Simulation failed: {}", e);
		std::process::exit(1);
	}

	for line in &game.console {
		println!("{}", line);
	}
	println!("--- after {} frames ---", game.frame);
	for (unit_type, count) in game.self_units().counts() {
		println!("{:>24}: {}", unit_type.name(), count);
	}
	let rejected = game.orders.iter().filter(|(_, _, accepted)| !accepted).count();
	println!(
		"minerals: {}, gas: {}, supply: {}/{}",
		game.minerals,
		game.gas,
		game.supply_used / 2,
		game.supply_total / 2
	);
	println!(
		"orders: {} ({} rejected), active frames: {}, structures ordered: {}",
		game.orders.len(),
		rejected,
		bot.active_frames,
		bot.state.barracks_count
	);
}
