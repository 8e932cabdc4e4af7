#![feature(test)]

extern crate test;

use test::Bencher;
use tracky::examples::BoxGen;
use tracky::prelude::*;

#[bench]
fn bench_tracker_00010(b: &mut Bencher) {
    bench_tracker(10, b);
}

#[bench]
fn bench_tracker_00100(b: &mut Bencher) {
    bench_tracker(100, b);
}

#[bench]
fn bench_tracker_00500(b: &mut Bencher) {
    bench_tracker(500, b);
}

fn bench_tracker(objects: usize, b: &mut Bencher) {
    let shift = 1.0;
    let resize = 0.01;
    let mut iterators = Vec::default();

    for i in 0..objects {
        let start = BoundingBox::ltwh(1000.0 * i as f32, 1000.0 * i as f32, 50.0, 50.0);
        iterators.push(BoxGen::new(start, shift, resize))
    }

    let mut tracker = Tracker::new(10.0).unwrap();

    b.iter(|| {
        let observations = iterators
            .iter_mut()
            .map(|i| i.next().unwrap())
            .collect::<Vec<_>>();
        tracker.track(&observations).unwrap();
        assert_eq!(tracker.active().len(), objects);
    });
    assert!(tracker.finished().is_empty());
}
