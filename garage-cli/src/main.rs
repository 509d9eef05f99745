use clap::{ArgGroup, Parser};

extern crate garage_core;
use garage_core::prelude::*;

mod logger;

/// Hands vehicles to a player and drives them, one leg at a time.
/// With no plan given, drives a car and then a motorcycle.
/// After running `cargo build --release`, run with
/// ```bash
/// ./target/release/garage-cli --vehicle bicycle --vehicle car
/// ```
/// or, with a plan file,
/// ```bash
/// ./target/release/garage-cli --plan-file plan.yaml -vv
/// ```
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(group(
    ArgGroup::new("source")
    .args(&["vehicle", "plan", "file"])
))]
struct GarageApi {
    /// Vehicle to drive (car, motorcycle, bicycle, generic); repeat to drive several in order
    #[clap(long, value_parser)]
    vehicle: Vec<VehicleKind>,
    /// Drive plan as json string, e.g. '{"legs": ["car", "bicycle"]}'
    #[clap(long, value_parser)]
    plan: Option<String>,
    /// Path to drive plan file (yaml or json)
    #[clap(long = "plan-file", value_parser)]
    file: Option<String>,
    /// Print every vehicle with its messages and exit
    #[clap(long, action, conflicts_with = "source")]
    list: bool,
    /// Log to stderr; -v for info, -vv for debug
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl GarageApi {
    fn drive_plan(&self) -> anyhow::Result<DrivePlan> {
        if let Some(plan_json) = &self.plan {
            DrivePlan::from_json(plan_json)
        } else if let Some(plan_file) = &self.file {
            DrivePlan::from_file(plan_file)
        } else if !self.vehicle.is_empty() {
            DrivePlan::new(self.vehicle.clone())
        } else {
            Ok(DrivePlan::demo())
        }
    }
}

fn list_vehicles(out: &mut dyn std::io::Write) -> anyhow::Result<()> {
    for kind in VehicleKind::ALL {
        writeln!(
            out,
            "{}: {} / {}",
            kind,
            kind.start_engine_message(),
            kind.move_message()
        )?;
    }
    Ok(())
}

pub fn main() -> anyhow::Result<()> {
    let garage_api = GarageApi::parse();
    logger::init(garage_api.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if garage_api.list {
        return list_vehicles(&mut out);
    }

    let plan = garage_api.drive_plan()?;
    let legs = plan.run(&mut out)?;
    log::info!("drove {legs} leg(s)");
    Ok(())
}
