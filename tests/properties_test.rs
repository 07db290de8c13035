mod common;

use common::{mp4_file, mvhd_v0, mvhd_v1};
use mediaduration::{
    ContainerKind, DurationReport, Extraction, MovieHeaderExtractor, ParseError, ScanStrategy,
};
use proptest::prelude::*;
use std::io::Cursor;

fn kind_strategy() -> impl Strategy<Value = ContainerKind> {
    prop_oneof![Just(ContainerKind::MP4), Just(ContainerKind::MKV)]
}

fn result_strategy() -> impl Strategy<Value = (ContainerKind, Extraction)> {
    kind_strategy().prop_flat_map(|kind| match kind {
        ContainerKind::MKV => Just((kind.clone(), Extraction::Unsupported(kind))).boxed(),
        _ => (0u64..1_000_000)
            .prop_map(move |s| (kind.clone(), Extraction::Measured(s)))
            .boxed(),
    })
}

fn report_of(results: &[(ContainerKind, Extraction)]) -> DurationReport {
    let mut report = DurationReport::new();
    for (kind, extraction) in results {
        report.record(kind, extraction);
    }
    report
}

fn strategies() -> [MovieHeaderExtractor; 2] {
    [
        MovieHeaderExtractor::with_strategy(ScanStrategy::Structured),
        MovieHeaderExtractor::with_strategy(ScanStrategy::Linear),
    ]
}

proptest! {
    #[test]
    fn aggregation_is_order_independent(
        results in prop::collection::vec(result_strategy(), 0..32)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let (original, shuffled) = results;
        prop_assert_eq!(report_of(&original), report_of(&shuffled));
    }

    #[test]
    fn aggregation_is_associative(
        results in prop::collection::vec(result_strategy(), 0..32),
        split_a in 0usize..32,
        split_b in 0usize..32,
    ) {
        let a = split_a.min(results.len());
        let b = split_b.min(results.len()).max(a);

        // (x + y) + z
        let mut left = report_of(&results[..a]);
        left.merge(report_of(&results[a..b]));
        left.merge(report_of(&results[b..]));

        // x + (y + z)
        let mut tail = report_of(&results[a..b]);
        tail.merge(report_of(&results[b..]));
        let mut right = report_of(&results[..a]);
        right.merge(tail);

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, report_of(&results));
    }

    #[test]
    fn v0_duration_truncates(timescale in 1u32..=u32::MAX, duration in any::<u32>()) {
        let bytes = mp4_file(&mvhd_v0(timescale, duration));
        for extractor in strategies() {
            let seconds = extractor
                .extract_duration_seconds(&mut Cursor::new(&bytes))
                .unwrap();
            prop_assert_eq!(seconds, (duration / timescale) as u64);
        }
    }

    #[test]
    fn v1_duration_truncates(timescale in 1u32..=u32::MAX, duration in any::<u64>()) {
        let bytes = mp4_file(&mvhd_v1(timescale, duration));
        for extractor in strategies() {
            let seconds = extractor
                .extract_duration_seconds(&mut Cursor::new(&bytes))
                .unwrap();
            prop_assert_eq!(seconds, duration / timescale as u64);
        }
    }

    #[test]
    fn zero_timescale_never_divides(duration in any::<u32>()) {
        let bytes = mp4_file(&mvhd_v0(0, duration));
        for extractor in strategies() {
            let err = extractor
                .extract_duration_seconds(&mut Cursor::new(&bytes))
                .unwrap_err();
            prop_assert!(matches!(err, ParseError::InvalidTimescale));
        }
    }

    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        for extractor in strategies() {
            let _ = extractor.extract_duration_seconds(&mut Cursor::new(&bytes));
        }
    }
}
