use garage_core::prelude::*;

const SCENARIOS: [(VehicleKind, &str, &str); 4] = [
    (
        VehicleKind::Car,
        "Starting the engine of the car with a key.",
        "Driving a car with 4 wheels",
    ),
    (
        VehicleKind::Motorcycle,
        "Starting the engine of the motorcycle with a kick.",
        "Driving a motorcycle with 2 wheels",
    ),
    (
        VehicleKind::Bicycle,
        "Bicycles don't have engines. Just pedal.",
        "Driving a bicycle with 2 wheels",
    ),
    (
        VehicleKind::Generic,
        "Starting the engine of the vehicle.",
        "Driving a vehicle",
    ),
];

fn drive(player: &Player) -> Vec<String> {
    let mut buf: Vec<u8> = Vec::new();
    player.drive(&mut buf).unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_player_drives_every_variant() {
    let mut player = Player::new();
    for (kind, start, mv) in SCENARIOS.iter() {
        player.set_vehicle(kind);
        assert_eq!(drive(&player), vec![*start, *mv]);
        assert_eq!(kind.start_engine_message(), *start);
        assert_eq!(kind.move_message(), *mv);
    }
}

#[test]
fn test_boxed_variants_through_player() {
    let garage: Vec<Box<dyn Vehicle>> = vec![
        Box::new(Car),
        Box::new(Motorcycle),
        Box::new(Bicycle),
        Box::new(GenericVehicle),
    ];
    for (veh, (kind, start, mv)) in garage.iter().zip(SCENARIOS.iter()) {
        assert_eq!(veh.kind(), *kind);
        let player = Player::with_vehicle(veh);
        assert_eq!(drive(&player), vec![*start, *mv]);
    }
}

#[test]
fn test_demo_plan_matches_manual_driving() {
    // all three are built, only car and motorcycle get driven
    let car = Car;
    let motorcycle = Motorcycle;
    let _bicycle = Bicycle;
    let mut player = Player::new();

    player.set_vehicle(&car);
    let first = drive(&player);
    player.set_vehicle(&motorcycle);
    let second = drive(&player);

    let mut buf: Vec<u8> = Vec::new();
    DrivePlan::demo().run(&mut buf).unwrap();
    let planned: Vec<String> = String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(planned, [first, second].concat());
}

#[test]
fn test_unassigned_player() {
    let player = Player::new();
    let mut buf: Vec<u8> = Vec::new();
    let err = player.drive(&mut buf).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PlayerError>(),
        Some(PlayerError::UnassignedVehicle)
    ));
    assert!(buf.is_empty());
    assert!(player.vehicle().is_none());
}
