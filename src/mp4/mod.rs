pub mod r#box;
pub use r#box::{make_box, read_box_header, write_box_header, BoxHeader, BoxWalker, FourCC, Mp4Box};
pub mod extractor;
pub use extractor::{extract_duration_seconds, MovieHeaderExtractor, ScanStrategy};
pub mod mvhd;
pub use mvhd::MovieHeader;
pub mod scan;
pub use scan::scan_for_box;

#[cfg(test)]
mod extractor_test;
