use distancing::prelude::*;
use csv::*;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct TableRow {
    max_age: Age,
    rate: Real,
}

/// Load a custom age-rate table from a CSV file with max_age,rate rows.
pub fn read_rates_table(path: &str) -> Result<FatalityTable> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut bands = Vec::new();
    for res in reader.deserialize() {
        let row: TableRow = res?;
        bands.push(RateBand {
            max_age: row.max_age,
            rate: row.rate,
        });
    }
    return Ok(FatalityTable::new(bands));
}

pub fn main() {
    use simple_logger::SimpleLogger;
    SimpleLogger::new().init().unwrap();

    let args: Vec<String> = std::env::args().collect();
    let ages = args.get(1).map(String::as_str).unwrap_or("40,40");
    let household = match Household::parse(ages) {
        Ok(household) => household,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let table = match read_rates_table("rates.csv") {
        Ok(table) => {
            println!("Using age bands from rates.csv");
            table
        }
        _ => FatalityTable::default(),
    };

    let mut rng = SmallRng::from_entropy();
    for roll in household.roll_all(&table, &mut rng) {
        println!(
            "{} year old: fatality rate {:.1}%, {}",
            roll.age(),
            100.0 * roll.rate(),
            if roll.state().is_dead() { "dead" } else { "alive" }
        );
    }
}
