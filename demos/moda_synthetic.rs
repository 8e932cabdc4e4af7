use anyhow::Result;
use tracky::examples::{BoxGen, NoisyDetector};
use tracky::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut objects = (0..5)
        .map(|i| BoxGen::new(BoundingBox::ltwh(150.0 * i as f32, 100.0, 40.0, 60.0), 2.0, 0.5))
        .collect::<Vec<_>>();

    for (jitter, miss_rate, false_alarm_rate) in [(1.0, 0.0, 0.0), (5.0, 0.1, 0.1), (20.0, 0.3, 0.5)] {
        let mut detector = NoisyDetector::new(jitter, miss_rate, false_alarm_rate);
        let frames = (0..100)
            .map(|_| {
                let truth = objects
                    .iter_mut()
                    .map(|o| o.next().unwrap())
                    .collect::<Vec<_>>();
                (detector.detect(&truth), truth)
            })
            .collect::<Vec<_>>();

        let moda = compute_sequence_moda(&frames, DEFAULT_MODA_IOU_THRESHOLD)?;
        println!(
            "jitter: {}, miss rate: {}, false alarm rate: {} => {:?}, MODA: {:.3}",
            jitter,
            miss_rate,
            false_alarm_rate,
            moda,
            moda.value()
        );
    }
    Ok(())
}
