//! Module containing drive plans: ordered lists of vehicles a player drives in turn.

use crate::imports::*;
use crate::player::Player;
use crate::traits::Document;
use crate::vehicle::VehicleKind;

/// Vehicles to hand to a player, one after the other. Each leg assigns the
/// vehicle and drives it once.
///
/// In YAML:
/// ```yaml
/// legs:
///   - car
///   - motorcycle
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DrivePlan {
    legs: Vec<VehicleKind>,
}

impl Document for DrivePlan {
    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.legs.is_empty(),
            "Drive plan has no legs, expected at least one of {:?}",
            VehicleKind::ALL.iter().map(VehicleKind::name).collect::<Vec<_>>()
        );
        Ok(())
    }
}

impl Default for DrivePlan {
    fn default() -> Self {
        Self::demo()
    }
}

impl DrivePlan {
    pub fn new(legs: Vec<VehicleKind>) -> anyhow::Result<Self> {
        let plan = Self { legs };
        plan.validate()?;
        Ok(plan)
    }

    /// Car, then motorcycle
    pub fn demo() -> Self {
        Self {
            legs: vec![VehicleKind::Car, VehicleKind::Motorcycle],
        }
    }

    pub fn legs(&self) -> &[VehicleKind] {
        &self.legs
    }

    /// Drives every leg in order with a single player, writing all messages to
    /// `out`. Returns the number of legs driven.
    pub fn run(&self, out: &mut dyn Write) -> anyhow::Result<usize> {
        let mut player = Player::new();
        for (i, leg) in self.legs.iter().enumerate() {
            #[cfg(feature = "logging")]
            log::info!("leg {} of {}: {}", i + 1, self.legs.len(), leg);
            player.set_vehicle(leg);
            player
                .drive(out)
                .with_context(|| format!("driving leg {} ({leg})", i + 1))?;
        }
        Ok(self.legs.len())
    }
}
