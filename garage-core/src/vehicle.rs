//! Module containing the vehicle capability and its concrete variants.

use crate::imports::*;

use std::str::FromStr;

/// Capability shared by everything a [`Player`](crate::player::Player) can drive.
///
/// Each operation writes exactly one line to `out`. Neither can fail on the vehicle
/// side; the only error surfaced is the sink's own write error.
pub trait Vehicle {
    /// Type tag of this vehicle
    fn kind(&self) -> VehicleKind;

    /// Writes how this vehicle gets going.
    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()>;

    /// Writes how this vehicle moves.
    /// Named `move_on` since `move` is a reserved word.
    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()>;
}

impl<V: Vehicle + ?Sized> Vehicle for &V {
    fn kind(&self) -> VehicleKind {
        (**self).kind()
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        (**self).start_engine(out)
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        (**self).move_on(out)
    }
}

impl<V: Vehicle + ?Sized> Vehicle for Box<V> {
    fn kind(&self) -> VehicleKind {
        (**self).kind()
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        (**self).start_engine(out)
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        (**self).move_on(out)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Car;

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Starting the engine of the car with a key.")?;
        Ok(())
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Driving a car with 4 wheels")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Motorcycle;

impl Vehicle for Motorcycle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Motorcycle
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Starting the engine of the motorcycle with a kick.")?;
        Ok(())
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Driving a motorcycle with 2 wheels")?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bicycle;

impl Vehicle for Bicycle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bicycle
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Bicycles don't have engines. Just pedal.")?;
        Ok(())
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Driving a bicycle with 2 wheels")?;
        Ok(())
    }
}

/// Plain vehicle with no particular way of starting or moving.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericVehicle;

impl Vehicle for GenericVehicle {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Generic
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Starting the engine of the vehicle.")?;
        Ok(())
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        writeln!(out, "Driving a vehicle")?;
        Ok(())
    }
}

/// Closed set of vehicle variants, usable wherever a vehicle has to be named in
/// data (drive plans, command line arguments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Car,
    Motorcycle,
    Bicycle,
    #[serde(alias = "vehicle")]
    Generic,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 4] = [
        VehicleKind::Car,
        VehicleKind::Motorcycle,
        VehicleKind::Bicycle,
        VehicleKind::Generic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Car => "car",
            Self::Motorcycle => "motorcycle",
            Self::Bicycle => "bicycle",
            Self::Generic => "generic",
        }
    }

    /// Concrete vehicle this kind stands for
    pub fn as_vehicle(&self) -> &'static dyn Vehicle {
        match self {
            Self::Car => &Car,
            Self::Motorcycle => &Motorcycle,
            Self::Bicycle => &Bicycle,
            Self::Generic => &GenericVehicle,
        }
    }

    /// Line written by [`Vehicle::start_engine`], without the trailing newline
    pub fn start_engine_message(&self) -> String {
        self.capture(|veh, buf| veh.start_engine(buf))
    }

    /// Line written by [`Vehicle::move_on`], without the trailing newline
    pub fn move_message(&self) -> String {
        self.capture(|veh, buf| veh.move_on(buf))
    }

    fn capture<F>(&self, op: F) -> String
    where
        F: Fn(&dyn Vehicle, &mut dyn Write) -> anyhow::Result<()>,
    {
        let mut buf: Vec<u8> = Vec::new();
        // writing into a `Vec<u8>` cannot fail
        let _ = op(self.as_vehicle(), &mut buf);
        String::from_utf8_lossy(&buf).trim_end().to_string()
    }
}

impl Vehicle for VehicleKind {
    fn kind(&self) -> VehicleKind {
        *self
    }

    fn start_engine(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        self.as_vehicle().start_engine(out)
    }

    fn move_on(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        self.as_vehicle().move_on(out)
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorcycle" => Ok(Self::Motorcycle),
            "bicycle" => Ok(Self::Bicycle),
            "generic" | "vehicle" => Ok(Self::Generic),
            other => bail!(
                "Unknown vehicle {other:?}, must be one of {:?}",
                Self::ALL.iter().map(VehicleKind::name).collect::<Vec<_>>()
            ),
        }
    }
}
