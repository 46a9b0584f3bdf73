use std::collections::BTreeMap;

use vkcap_core::config::VkcapConfig;
use vkcap_core::ChunkType;

use crate::open_capture;

#[derive(Default)]
struct ChunkStats {
    count: u64,
    payload: u64,
    stored: u64,
    compressed: u64,
}

pub fn run_stats(path: &str, config: &VkcapConfig) -> anyhow::Result<()> {
    let file_size = std::fs::metadata(path)?.len();
    let mut reader = open_capture(path, config)?;

    let mut per_type: BTreeMap<ChunkType, ChunkStats> = BTreeMap::new();
    while let Some(chunk) = reader.inspect_next()? {
        let stats = per_type.entry(chunk.chunk_type).or_default();
        stats.count += 1;
        stats.payload += chunk.payload_size as u64;
        stats.stored += chunk.stored_size as u64;
        if chunk.compressed {
            stats.compressed += 1;
        }
    }

    println!();
    println!("{} (version {}, {} bytes)", path, reader.version(), file_size);
    println!();
    println!(
        "  {:<32} {:>7} {:>12} {:>12} {:>10}",
        "chunk", "count", "payload", "stored", "compressed"
    );

    let mut total = ChunkStats::default();
    for (chunk_type, stats) in &per_type {
        println!(
            "  {:<32} {:>7} {:>12} {:>12} {:>10}",
            chunk_type.name(),
            stats.count,
            stats.payload,
            stats.stored,
            stats.compressed
        );
        total.count += stats.count;
        total.payload += stats.payload;
        total.stored += stats.stored;
        total.compressed += stats.compressed;
    }

    println!("  {}", "-".repeat(77));
    println!(
        "  {:<32} {:>7} {:>12} {:>12} {:>10}",
        "total", total.count, total.payload, total.stored, total.compressed
    );
    if total.payload > 0 {
        println!(
            "  stored/payload ratio: {:.1}%",
            total.stored as f64 * 100.0 / total.payload as f64
        );
    }
    println!();
    Ok(())
}
