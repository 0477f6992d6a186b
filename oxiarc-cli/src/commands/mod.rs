//! Command implementations for OxiHuff CLI.

pub mod codes;
pub mod compress;
pub mod copy;
pub mod decompress;
pub mod info;

pub use codes::cmd_codes;
pub use compress::{CompressOptions, cmd_compress};
pub use copy::cmd_copy;
pub use decompress::cmd_decompress;
pub use info::cmd_info;
pub use test::cmd_test;
