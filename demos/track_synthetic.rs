use anyhow::Result;
use tracky::examples::BoxGen;
use tracky::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut tracker = TrackerOptions::default()
        .distance_threshold(10.0)
        .fps(30)
        .precision(1)
        .build()?;

    let shift = 1.0;
    let resize = 0.2;
    let mut b1 = BoxGen::new_monotonous(BoundingBox::ltwh(100.0, 100.0, 10.0, 15.0), shift, resize);
    let mut b2 = BoxGen::new_monotonous(BoundingBox::ltwh(10.0, 10.0, 12.0, 18.0), shift, resize);

    for i in 0..20 {
        let obj1b = b1.next().unwrap();
        let obj2b = b2.next().unwrap();
        // the second object is occluded for a few frames
        if (8..11).contains(&i) {
            tracker.track(&[obj1b])?;
        } else {
            tracker.track(&[obj1b, obj2b])?;
        }
    }

    for t in tracker.tracklets() {
        eprintln!(
            "Tracklet id: {}, start: {}, length: {}",
            t.id(),
            t.start_index(),
            t.len()
        );
    }

    println!("{}", serde_json::to_string_pretty(&tracker.record())?);
    Ok(())
}
