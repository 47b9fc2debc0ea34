//! Builds SWITCH -> NOT x N -> BULB, flips the switch and prints how the
//! change walks down the chain one gate per tick.
//!
//! Run with `RUST_LOG=debug` to see every edit and tick summary.

use gatesim::{Kind, Simulator};
use log::info;

const CHAIN_LENGTH: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut sim = Simulator::new();
    let switch = sim.place_component(Kind::Switch, None);
    let mut chain = Vec::with_capacity(CHAIN_LENGTH);
    let mut prev = switch;
    for _ in 0..CHAIN_LENGTH {
        let gate = sim.place_component(Kind::Not, None);
        sim.connect(prev.output(0), gate.input(0))?;
        chain.push(gate);
        prev = gate;
    }
    let bulb = sim.place_component(Kind::Bulb, None);
    sim.connect(prev.output(0), bulb.input(0))?;

    // let the chain settle with the switch off
    sim.run_for(CHAIN_LENGTH as u64 + 1);
    info!("settled after {} ticks", sim.current_tick());

    sim.toggle(switch)?;
    let header: Vec<String> = (1..=CHAIN_LENGTH).map(|i| format!("n{}", i)).collect();
    println!("tick | {} | bulb", header.join(" "));
    for _ in 0..=CHAIN_LENGTH {
        let report = sim.tick();
        let gates = chain
            .iter()
            .map(|&id| sim.read_state(id).map(|s| if s.output_state { " 1" } else { " 0" }))
            .collect::<Result<Vec<_>, _>>()?
            .join(" ");
        let lit = sim.read_state(bulb)?.lit;
        println!("{:4} | {} | {}", report.tick, gates, if lit { "on" } else { "off" });
    }

    Ok(())
}
