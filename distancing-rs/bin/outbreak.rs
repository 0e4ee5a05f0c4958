use std::fs;

use distancing::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    initial_infected: u32,
    fatality_rate: Real,
    reproduction_factor: Real,
    num_weeks: usize,
    verbose: bool,
}

impl Config {
    pub fn write_data(&self, data: String, name: &str) {
        fs::write(name, data).unwrap();
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_infected: 1,
            fatality_rate: CASE_FATALITY_RATE,
            reproduction_factor: BASIC_REPRODUCTION_FACTOR,
            num_weeks: 10,
            verbose: true,
        }
    }
}

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().unwrap();

    let cfg: Config = match fs::read_to_string("conf.toml") {
        Ok(data) => toml::from_str(&data).unwrap(),
        _ => Default::default(),
    };

    if cfg.verbose {
        println!("{:#?}", cfg);
    }

    let mut sim = OutbreakSimulation::with_params(
        cfg.initial_infected,
        cfg.fatality_rate,
        cfg.reproduction_factor,
    );
    sim.run(cfg.num_weeks);

    println!(
        "week {}: {} people infected, {} killed so far",
        sim.state().weeks(),
        sim.state().infected(),
        sim.total_killed()
    );
    cfg.write_data(sim.render_killcurve_csv("week,infected,killed"), "killcurve.csv");
}
