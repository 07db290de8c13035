#![allow(dead_code)]

use mediaduration::mp4::make_box;
use std::fs;
use std::path::Path;

pub fn mvhd_v0(timescale: u32, duration: u32) -> Vec<u8> {
    let mut p = vec![0u8; 4]; // version 0, flags
    p.extend_from_slice(&[0u8; 8]); // creation, modification
    p.extend_from_slice(&timescale.to_be_bytes());
    p.extend_from_slice(&duration.to_be_bytes());
    p.extend_from_slice(&[0u8; 80]);
    p
}

pub fn mvhd_v1(timescale: u32, duration: u64) -> Vec<u8> {
    let mut p = vec![1u8, 0, 0, 0];
    p.extend_from_slice(&[0u8; 16]);
    p.extend_from_slice(&timescale.to_be_bytes());
    p.extend_from_slice(&duration.to_be_bytes());
    p.extend_from_slice(&[0u8; 80]);
    p
}

/// `ftyp + moov{mvhd} + mdat` around the given mvhd payload
pub fn mp4_file(mvhd_payload: &[u8]) -> Vec<u8> {
    [
        make_box("ftyp", b"isom\0\0\x02\0isomiso2mp41"),
        make_box("moov", &make_box("mvhd", mvhd_payload)),
        make_box("mdat", &[0u8; 32]),
    ]
    .concat()
}

pub fn write_mp4(path: &Path, timescale: u32, duration: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, mp4_file(&mvhd_v0(timescale, duration))).unwrap();
}
