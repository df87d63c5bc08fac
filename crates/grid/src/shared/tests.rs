use std::thread;

use super::*;

#[test]
fn clones_share_state() {
	let shared = SharedGridRegistry::new(GridLocationRegistry::new(4).unwrap());
	let other = shared.clone();

	assert!(shared.place("rod", 1, 1));
	assert_eq!(other.entity_at(1, 1).as_deref(), Some("rod"));
	assert_eq!(other.count(), 1);
}

#[test]
fn concurrent_placements_never_double_occupy() {
	let shared = SharedGridRegistry::new(GridLocationRegistry::new(8).unwrap());

	let handles: Vec<_> = (0..8)
		.map(|t| {
			let shared = shared.clone();
			thread::spawn(move || {
				let name = format!("rod-{t}");
				let mut won = 0;
				for cell in 0..64i64 {
					if shared.place(&name, cell / 8, cell % 8) {
						won += 1;
					}
				}
				won
			})
		})
		.collect();

	let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
	assert_eq!(total, 64);
	assert_eq!(shared.count(), 64);
	shared.with(|registry| registry.assert_consistent());
}

#[test]
fn with_mut_applies_compound_update() {
	let shared = SharedGridRegistry::new(GridLocationRegistry::new(3).unwrap());
	shared.place("a", 0, 0);

	let moved = shared.with_mut(|registry| {
		registry.remove_by_name("a") && registry.place("a", 2, 2)
	});

	assert!(moved);
	assert_eq!(shared.entity_at(0, 0), None);
	assert_eq!(shared.locations_of("a"), vec![CellIndex(8)]);
}
