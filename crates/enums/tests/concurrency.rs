use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use rtenum_enums::{IntEnum, StrEnum};

const THREADS: i64 = 8;
const PER_THREAD: i64 = 250;

#[test]
fn concurrent_distinct_inserts_all_land() {
	let e = IntEnum::new();

	thread::scope(|s| {
		for t in 0..THREADS {
			let e = &e;
			s.spawn(move || {
				for i in 0..PER_THREAD {
					let v = t * PER_THREAD + i;
					e.insert(v, format!("member {v}")).unwrap();
				}
			});
		}
	});

	assert_eq!(e.len() as i64, THREADS * PER_THREAD);
	assert_eq!(e.to_desc_map().len() as i64, THREADS * PER_THREAD);
	for v in 0..THREADS * PER_THREAD {
		assert_eq!(e.get(&v).unwrap().desc(), format!("member {v}"));
	}
}

#[test]
fn concurrent_same_value_has_single_winner() {
	let e = Arc::new(StrEnum::new());
	let wins = Arc::new(AtomicUsize::new(0));

	let handles: Vec<_> = (0..16)
		.map(|t| {
			let e = Arc::clone(&e);
			let wins = Arc::clone(&wins);
			thread::spawn(move || {
				if e.insert("shared".to_string(), format!("thread {t}")).is_ok() {
					wins.fetch_add(1, Ordering::SeqCst);
				}
			})
		})
		.collect();
	for handle in handles {
		handle.join().unwrap();
	}

	assert_eq!(wins.load(Ordering::SeqCst), 1);
	assert_eq!(e.len(), 1);
}

#[test]
fn readers_never_observe_partial_members() {
	let e = IntEnum::new();

	thread::scope(|s| {
		s.spawn(|| {
			for v in 0..2_000 {
				e.insert(v, format!("d{v}")).unwrap();
			}
		});

		for _ in 0..4 {
			s.spawn(|| {
				for _ in 0..200 {
					let len = e.len();
					for member in e.members() {
						assert_eq!(member.desc(), format!("d{}", member.value()));
					}

					let map = e.to_desc_map();
					assert!(map.len() >= len, "description map went backwards");
					for (v, d) in map.iter() {
						assert_eq!(d, &format!("d{v}"));
					}

					if let Ok(m) = e.get(&0) {
						assert_eq!(m.desc(), "d0");
					}
				}
			});
		}
	});

	let map = e.to_desc_map();
	assert_eq!(map.len(), 2_000);
	assert_eq!(e.members().len(), 2_000);
}

#[test]
fn desc_map_tracks_interleaved_inserts() {
	let e = IntEnum::new();

	thread::scope(|s| {
		s.spawn(|| {
			for v in 0..500 {
				e.insert(v, "x").unwrap();
				// Reading right after our own insert must include it.
				assert!(e.to_desc_map().contains_key(&v));
			}
		});
		s.spawn(|| {
			for _ in 0..500 {
				let _ = e.to_desc_map();
			}
		});
	});

	assert_eq!(e.to_desc_map().len(), 500);
}
