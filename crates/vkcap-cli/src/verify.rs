use std::collections::{HashMap, HashSet};

use serde::Serialize;
use vkcap_core::config::VkcapConfig;
use vkcap_core::{CaptureReader, InspectedChunk};
use vkcap_protocol::{ResourceId, StructuredValue};

use crate::open_capture;

/// Items listed per check before the rest are summarised.
const MAX_LISTED: usize = 8;

// ── Check result types ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Pass,
    Fail,
    Warn,
    Skip,
}

impl CheckStatus {
    /// Console badge and its ANSI colour.
    fn badge(self) -> (&'static str, &'static str) {
        match self {
            CheckStatus::Pass => ("[PASS]", "\x1b[32m"),
            CheckStatus::Fail => ("[FAIL]", "\x1b[31m"),
            CheckStatus::Warn => ("[WARN]", "\x1b[33m"),
            CheckStatus::Skip => ("[SKIP]", "\x1b[90m"),
        }
    }
}

#[derive(Debug, Serialize)]
struct CheckResult {
    name: String,
    status: CheckStatus,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<String>,
}

impl CheckResult {
    fn new(name: &str, status: CheckStatus, message: &str) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    fn pass(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Pass, message)
    }

    fn fail(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Fail, message)
    }

    fn warn(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Warn, message)
    }

    fn skip(name: &str, message: &str) -> Self {
        Self::new(name, CheckStatus::Skip, message)
    }

    fn detail(mut self, detail: &str) -> Self {
        self.details.push(detail.to_string());
        self
    }
}

// ── Main entry point ────────────────────────────────────────────────────────

pub fn run_verify(path: &str, config: &VkcapConfig, json: bool) -> anyhow::Result<()> {
    let mut results: Vec<CheckResult> = Vec::new();

    // Check 1: File header
    match check_header(path, config, &mut results) {
        Some(reader) => {
            // Check 2: Every chunk decodes
            let chunks = check_decode(reader, &mut results);
            // Check 3 + 4: Identifiers
            check_identifiers(&chunks, &mut results);
        }
        None => {
            results.push(CheckResult::skip("Chunk decoding", "No readable header"));
            results.push(CheckResult::skip("Created identifiers", "No readable header"));
            results.push(CheckResult::skip("References", "No readable header"));
        }
    }

    if json {
        println!("{}", serde_json::to_string(&results)?);
    } else {
        print_results_pretty(path, &results);
    }

    // Exit code 1 if any failures
    if results
        .iter()
        .any(|r| matches!(r.status, CheckStatus::Fail))
    {
        std::process::exit(1);
    }

    Ok(())
}

// ── Check 1: File header ────────────────────────────────────────────────────

fn check_header(
    path: &str,
    config: &VkcapConfig,
    results: &mut Vec<CheckResult>,
) -> Option<CaptureReader<std::io::BufReader<std::fs::File>>> {
    match open_capture(path, config) {
        Ok(reader) => {
            results.push(CheckResult::pass(
                "File header",
                &format!("Capture format version {}", reader.version()),
            ));
            Some(reader)
        }
        Err(e) => {
            results.push(
                CheckResult::fail("File header", &format!("Cannot open capture: {}", e))
                    .detail("Expected an 8-byte VKCAPTUR magic followed by the format version"),
            );
            None
        }
    }
}

// ── Check 2: Chunk decoding ─────────────────────────────────────────────────

fn check_decode<R: std::io::Read>(
    mut reader: CaptureReader<R>,
    results: &mut Vec<CheckResult>,
) -> Vec<InspectedChunk> {
    let mut chunks = Vec::new();
    let mut compressed = 0usize;
    loop {
        match reader.inspect_next() {
            Ok(Some(chunk)) => {
                if chunk.compressed {
                    compressed += 1;
                }
                chunks.push(chunk);
            }
            Ok(None) => {
                results.push(
                    CheckResult::pass("Chunk decoding", &format!("{} chunks decoded", chunks.len()))
                        .detail(&format!("{} stored compressed", compressed)),
                );
                break;
            }
            Err(e) => {
                let mut result = CheckResult::fail(
                    "Chunk decoding",
                    &format!("Chunk {} does not decode: {}", chunks.len(), e),
                );
                if let Some(last) = chunks.last() {
                    result = result.detail(&format!("Last good chunk: {}", last.chunk_type.name()));
                }
                results.push(result.detail("Later chunks are not checked"));
                break;
            }
        }
    }
    chunks
}

// ── Check 3 + 4: Created identifiers and references ─────────────────────────

fn check_identifiers(chunks: &[InspectedChunk], results: &mut Vec<CheckResult>) {
    // id -> index of the chunk that created it
    let mut created: HashMap<ResourceId, usize> = HashMap::new();
    let mut duplicates = Vec::new();
    let mut null_ids = 0usize;
    let mut dangling = Vec::new();
    let mut reference_count = 0usize;

    for (index, chunk) in chunks.iter().enumerate() {
        let mut declared = Vec::new();
        let mut referenced = HashSet::new();
        for root in &chunk.tree {
            root.visit(&mut |node| match node.value {
                StructuredValue::Declared(id) => declared.push(id),
                StructuredValue::Resource(id) if !id.is_null() => {
                    referenced.insert(id);
                }
                _ => {}
            });
        }

        reference_count += referenced.len();
        for id in referenced {
            if !created.contains_key(&id) {
                dangling.push(format!("#{} {}: {}", index, chunk.chunk_type.name(), id));
            }
        }

        for id in declared {
            if id.is_null() {
                null_ids += 1;
            } else if let Some(first) = created.insert(id, index) {
                duplicates.push(format!(
                    "{} created by #{} and again by #{} {}",
                    id,
                    first,
                    index,
                    chunk.chunk_type.name()
                ));
            }
        }
    }

    let result = if !duplicates.is_empty() {
        with_listed(
            CheckResult::fail(
                "Created identifiers",
                &format!("{} identifiers created more than once", duplicates.len()),
            ),
            &duplicates,
        )
    } else if null_ids > 0 {
        CheckResult::warn(
            "Created identifiers",
            &format!("{} chunks create an object with the null identifier", null_ids),
        )
    } else {
        CheckResult::pass(
            "Created identifiers",
            &format!("{} unique identifiers", created.len()),
        )
    };
    results.push(result);

    let result = if dangling.is_empty() {
        CheckResult::pass(
            "References",
            &format!("{} references resolve to earlier objects", reference_count),
        )
    } else {
        with_listed(
            CheckResult::warn(
                "References",
                &format!("{} references to objects not created earlier", dangling.len()),
            ),
            &dangling,
        )
        .detail("Objects created before capture started are not recorded")
    };
    results.push(result);
}

fn with_listed(mut result: CheckResult, items: &[String]) -> CheckResult {
    for item in items.iter().take(MAX_LISTED) {
        result = result.detail(item);
    }
    if items.len() > MAX_LISTED {
        result = result.detail(&format!("... and {} more", items.len() - MAX_LISTED));
    }
    result
}

// ── Output formatters ───────────────────────────────────────────────────────

fn print_results_pretty(path: &str, results: &[CheckResult]) {
    println!();
    println!("Capture check: {}", path);
    println!("{}", "=".repeat(15 + path.len()));
    println!();

    for result in results {
        let (badge, color) = result.status.badge();
        println!("  {}{}\x1b[0m {} - {}", color, badge, result.name, result.message);
        for detail in &result.details {
            println!("         {}", detail);
        }
        println!();
    }

    let count = |status: fn(&CheckStatus) -> bool| results.iter().filter(|r| status(&r.status)).count();
    println!("-------------------------------");
    println!(
        "  {} passed, {} failed, {} warnings",
        count(|s| matches!(s, CheckStatus::Pass)),
        count(|s| matches!(s, CheckStatus::Fail)),
        count(|s| matches!(s, CheckStatus::Warn)),
    );
    println!();
}
