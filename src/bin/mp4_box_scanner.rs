use mediaduration::errors::ParseError;
use mediaduration::mp4::{BoxWalker, FourCC, MovieHeader};
use mediaduration::streams::{LocalSeekableStream, SeekableStream};
use std::env;
use std::io::{Read, Seek};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("🔍 MP4 Box Scanner");
    println!("==================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: mp4_box_scanner <file.mp4>");
        return ExitCode::FAILURE;
    }
    let file_path = &args[1];

    match scan_mp4_structure(file_path) {
        Ok(_) => {
            println!("\n✅ Scan completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("\n❌ Scan failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn scan_mp4_structure(path: &str) -> Result<(), ParseError> {
    let mut stream = LocalSeekableStream::open(path)?;
    let file_size = stream.byte_len()?;

    println!("📄 File: {}", path);
    println!("📏 Size: {} bytes", file_size);
    println!();

    let mut walker = BoxWalker::new(&mut stream)?;
    scan_boxes(&mut walker, 0)
}

fn scan_boxes<S: Read + Seek>(walker: &mut BoxWalker<'_, S>, depth: usize) -> Result<(), ParseError> {
    let indent = "  ".repeat(depth);

    while let Some(item) = walker.next_box() {
        let mut mp4_box = match item {
            Ok(b) => b,
            Err(e) => {
                println!("{}⚠️  {}", indent, e);
                break;
            }
        };

        let header = mp4_box.header().clone();
        println!(
            "{}📦 {} [size: {}, pos: {}-{}]",
            indent,
            header.fourcc,
            header.size,
            header.offset,
            header.end()
        );

        if header.fourcc.is_container() {
            scan_boxes(&mut mp4_box.children(), depth + 1)?;
        } else if header.fourcc == FourCC::MVHD {
            let mvhd = MovieHeader::read(&mut mp4_box.payload()?)?;
            println!(
                "{}  ⏱️  version {}, timescale {}, duration {}",
                indent, mvhd.version, mvhd.timescale, mvhd.duration
            );
            match mvhd.duration_seconds() {
                Ok(seconds) => println!("{}  ⏱️  {} seconds", indent, seconds),
                Err(e) => println!("{}  ⚠️  {}", indent, e),
            }
        }
    }

    Ok(())
}
