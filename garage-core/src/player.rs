//! Module containing the player, which drives whatever vehicle it has been handed.

use crate::imports::*;
use crate::vehicle::Vehicle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerError {
    /// `drive` was called before any vehicle was assigned
    UnassignedVehicle,
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnassignedVehicle => {
                f.write_str("Player has no vehicle assigned; call `set_vehicle` before `drive`")
            }
        }
    }
}

impl std::error::Error for PlayerError {}

/// Whether a player currently has a vehicle
#[derive(Clone, Copy, Default)]
pub enum PlayerState<'v> {
    #[default]
    Unassigned,
    Assigned(&'v dyn Vehicle),
}

impl fmt::Debug for PlayerState<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unassigned => f.write_str("Unassigned"),
            Self::Assigned(veh) => f.debug_tuple("Assigned").field(&veh.kind()).finish(),
        }
    }
}

/// Operates whichever vehicle it currently holds.
///
/// The player borrows its vehicle and never owns it, so the same vehicle may be
/// handed to several players, and reassigned freely.
///
/// # Example
/// ```
/// use garage_core::prelude::*;
///
/// let car = Car;
/// let bicycle = Bicycle;
/// let mut out: Vec<u8> = Vec::new();
///
/// let mut player = Player::with_vehicle(&car);
/// player.drive(&mut out).unwrap();
/// player.set_vehicle(&bicycle);
/// player.drive(&mut out).unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "Starting the engine of the car with a key.\n\
///      Driving a car with 4 wheels\n\
///      Bicycles don't have engines. Just pedal.\n\
///      Driving a bicycle with 2 wheels\n"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Player<'v> {
    state: PlayerState<'v>,
}

impl<'v> Player<'v> {
    /// Player without a vehicle. [`Player::drive`] fails until
    /// [`Player::set_vehicle`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    /// Player that already holds `vehicle`, so it can never be unassigned
    pub fn with_vehicle(vehicle: &'v dyn Vehicle) -> Self {
        Self {
            state: PlayerState::Assigned(vehicle),
        }
    }

    /// Replaces whatever vehicle was previously assigned.
    pub fn set_vehicle(&mut self, vehicle: &'v dyn Vehicle) {
        #[cfg(feature = "logging")]
        log::debug!("assigning {} to player", vehicle.kind());
        self.state = PlayerState::Assigned(vehicle);
    }

    pub fn vehicle(&self) -> Option<&'v dyn Vehicle> {
        match self.state {
            PlayerState::Unassigned => None,
            PlayerState::Assigned(veh) => Some(veh),
        }
    }

    pub fn state(&self) -> PlayerState<'v> {
        self.state
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self.state, PlayerState::Assigned(_))
    }

    /// Starts the engine of the assigned vehicle, then moves it.
    ///
    /// # Errors
    /// [`PlayerError::UnassignedVehicle`] if no vehicle was ever assigned, in which
    /// case nothing is written to `out`.
    pub fn drive(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        let veh = self.vehicle().ok_or(PlayerError::UnassignedVehicle)?;
        #[cfg(feature = "logging")]
        log::debug!("driving {}", veh.kind());
        veh.start_engine(out)
            .with_context(|| format!("starting the engine of the {}", veh.kind()))?;
        veh.move_on(out)
            .with_context(|| format!("moving the {}", veh.kind()))?;
        Ok(())
    }
}
