pub use crate::plan::DrivePlan;
pub use crate::player::{Player, PlayerError, PlayerState};
pub use crate::traits::{Document, Format};
pub use crate::vehicle::{Bicycle, Car, GenericVehicle, Motorcycle, Vehicle, VehicleKind};
