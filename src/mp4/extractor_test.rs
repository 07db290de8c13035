#[cfg(test)]
mod tests {
    use crate::errors::ParseError;
    use crate::mp4::extractor::*;
    use crate::mp4::mvhd_test::test_helpers::*;
    use crate::mp4::r#box::{make_box, write_box_header};
    use std::io::Cursor;

    const STRATEGIES: [ScanStrategy; 2] = [ScanStrategy::Structured, ScanStrategy::Linear];

    fn extract(strategy: ScanStrategy, data: Vec<u8>) -> Result<u64, ParseError> {
        MovieHeaderExtractor::with_strategy(strategy).extract_duration_seconds(&mut Cursor::new(data))
    }

    #[test]
    fn test_version_0_duration() {
        for strategy in STRATEGIES {
            let data = minimal_mp4(&mvhd_payload_v0(600, 1800));
            assert_eq!(extract(strategy, data).unwrap(), 3, "{:?}", strategy);
        }
    }

    #[test]
    fn test_version_1_duration() {
        for strategy in STRATEGIES {
            let data = minimal_mp4(&mvhd_payload_v1(1000, 125_000));
            assert_eq!(extract(strategy, data).unwrap(), 125, "{:?}", strategy);
        }
    }

    #[test]
    fn test_truncating_division() {
        for strategy in STRATEGIES {
            let v0 = minimal_mp4(&mvhd_payload_v0(3, 10));
            let v1 = minimal_mp4(&mvhd_payload_v1(3, 10));
            assert_eq!(extract(strategy, v0).unwrap(), 3);
            assert_eq!(extract(strategy, v1).unwrap(), 3);
        }
    }

    #[test]
    fn test_zero_timescale() {
        for strategy in STRATEGIES {
            let data = minimal_mp4(&mvhd_payload_v0(0, 1800));
            assert!(matches!(
                extract(strategy, data),
                Err(ParseError::InvalidTimescale)
            ));
        }
    }

    #[test]
    fn test_mvhd_size_zero_or_one() {
        for strategy in STRATEGIES {
            for size in [0u32, 1] {
                let mut mvhd = Vec::new();
                write_box_header(&mut mvhd, "mvhd", size);
                mvhd.extend_from_slice(&mvhd_payload_v0(600, 1800));
                let data = [ftyp_box(), make_box("moov", &mvhd)].concat();
                assert!(
                    matches!(
                        extract(strategy, data),
                        Err(ParseError::UnsupportedBoxSize { size: s, .. }) if s == size
                    ),
                    "{:?} size {}",
                    strategy,
                    size
                );
            }
        }
    }

    #[test]
    fn test_no_movie_header() {
        let data = [ftyp_box(), make_box("free", &[0u8; 64]), make_box("mdat", &[7u8; 512])].concat();
        for strategy in STRATEGIES {
            let len = data.len() as u64;
            let mut cursor = Cursor::new(data.clone());
            let result = MovieHeaderExtractor::with_strategy(strategy)
                .extract_duration_seconds(&mut cursor);
            assert!(matches!(result, Err(ParseError::HeaderNotFound)));
            assert_eq!(cursor.position(), len, "{:?}", strategy);
        }
    }

    #[test]
    fn test_empty_stream() {
        for strategy in STRATEGIES {
            assert!(matches!(
                extract(strategy, Vec::new()),
                Err(ParseError::HeaderNotFound)
            ));
        }
    }

    #[test]
    fn test_structured_ignores_tag_inside_payload() {
        // a fake mvhd inside mdat precedes the real one
        let mut fake = Vec::new();
        write_box_header(&mut fake, "mvhd", 108);
        fake.extend_from_slice(&mvhd_payload_v0(1, 9999));
        let data = [
            ftyp_box(),
            make_box("mdat", &fake),
            make_box("moov", &make_box("mvhd", &mvhd_payload_v0(600, 1800))),
        ]
        .concat();

        assert_eq!(extract(ScanStrategy::Structured, data.clone()).unwrap(), 3);
        assert_eq!(extract(ScanStrategy::Linear, data).unwrap(), 9999);
    }

    #[test]
    fn test_moov_after_mdat() {
        let data = [
            ftyp_box(),
            make_box("mdat", &[0u8; 4096]),
            make_box(
                "moov",
                &[
                    make_box("udta", &[]),
                    make_box("mvhd", &mvhd_payload_v1(90_000, 90_000 * 61)),
                ]
                .concat(),
            ),
        ]
        .concat();
        for strategy in STRATEGIES {
            assert_eq!(extract(strategy, data.clone()).unwrap(), 61);
        }
    }

    #[test]
    fn test_truncated_header_is_io_error() {
        let full = minimal_mp4(&mvhd_payload_v1(1000, 125_000));
        // the walker rejects moov running past the end of the stream, the
        // linear fallback then reads fields until EOF
        let cut = full[..full.len() - 100].to_vec();
        for strategy in STRATEGIES {
            assert!(
                matches!(extract(strategy, cut.clone()), Err(ParseError::Io(_))),
                "{:?}",
                strategy
            );
        }
    }

    #[test]
    fn test_largesize_mdat_before_moov() {
        let mut mdat = Vec::new();
        write_box_header(&mut mdat, "mdat", 1);
        mdat.extend_from_slice(&(16u64 + 256).to_be_bytes());
        mdat.extend_from_slice(&[0u8; 256]);
        let data = [
            ftyp_box(),
            mdat,
            make_box("moov", &make_box("mvhd", &mvhd_payload_v0(600, 1800))),
        ]
        .concat();

        for strategy in STRATEGIES {
            assert_eq!(extract(strategy, data.clone()).unwrap(), 3, "{:?}", strategy);
        }
    }

    #[test]
    fn test_bare_movie_header_box() {
        let data = make_box("mvhd", &mvhd_payload_v0(600, 1800));
        for strategy in STRATEGIES {
            assert_eq!(extract(strategy, data.clone()).unwrap(), 3, "{:?}", strategy);
        }
    }

    #[test]
    fn test_default_helper_uses_structured_walk() {
        assert_eq!(MovieHeaderExtractor::new().strategy(), ScanStrategy::Structured);
        let data = minimal_mp4(&mvhd_payload_v0(600, 1800));
        assert_eq!(extract_duration_seconds(&mut Cursor::new(data)).unwrap(), 3);
    }
}
