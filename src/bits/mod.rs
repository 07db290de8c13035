pub mod reader;
pub use reader::{read_u24, read_u32_be, read_u64_be, read_u8, skip_bytes};
