//! Copy command implementation.

use crate::utils::{create_progress_bar, format_size};
use oxiarc_core::transfer_uri;

pub fn cmd_copy(
    source: &str,
    destination: &str,
    block_size: usize,
    progress: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Length is unknown until the source is opened; the first block sets it.
    let pb = create_progress_bar(0, progress);
    pb.set_message(source.to_string());

    let result = transfer_uri(source, destination, block_size, |p| {
        if p.blocks == 1 {
            pb.set_length(p.total);
        }
        pb.set_position(p.written);
    })?;
    pb.finish_and_clear();

    println!(
        "Copied {} -> {}: {} in {} blocks ({:.2}s)",
        source,
        destination,
        format_size(result.written),
        result.blocks,
        result.elapsed.as_secs_f64()
    );
    Ok(())
}
