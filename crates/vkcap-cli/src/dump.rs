use std::io::{self, Write};

use serde::Serialize;
use vkcap_core::config::VkcapConfig;
use vkcap_protocol::{StructuredObject, StructuredValue};

use crate::open_capture;

#[derive(Serialize)]
struct DumpEntry<'a> {
    index: u64,
    chunk: &'static str,
    payload_size: usize,
    stored_size: usize,
    compressed: bool,
    tree: &'a [StructuredObject],
}

pub fn run_dump(path: &str, config: &VkcapConfig, json: bool) -> anyhow::Result<()> {
    let mut reader = open_capture(path, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let mut chunks = Vec::new();
        while let Some(chunk) = reader.inspect_next()? {
            chunks.push(chunk);
        }
        let entries: Vec<DumpEntry<'_>> = chunks
            .iter()
            .enumerate()
            .map(|(i, c)| DumpEntry {
                index: i as u64,
                chunk: c.chunk_type.name(),
                payload_size: c.payload_size,
                stored_size: c.stored_size,
                compressed: c.compressed,
                tree: &c.tree,
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} (version {})", path, reader.version())?;
    let mut index = 0u64;
    while let Some(chunk) = reader.inspect_next()? {
        write!(
            out,
            "\n#{} {} ({} bytes",
            index,
            chunk.chunk_type.name(),
            chunk.payload_size
        )?;
        if chunk.compressed {
            write!(out, ", {} stored", chunk.stored_size)?;
        }
        writeln!(out, ")")?;
        for root in &chunk.tree {
            for node in root.children() {
                print_node(&mut out, node, 1)?;
            }
        }
        index += 1;
    }
    Ok(())
}

fn print_node(out: &mut impl Write, node: &StructuredObject, depth: usize) -> io::Result<()> {
    let indent = "  ".repeat(depth);
    match &node.value {
        StructuredValue::Struct(children) | StructuredValue::Array(children) => {
            let suffix = match &node.value {
                StructuredValue::Array(_) => format!("[{}]", children.len()),
                _ => String::new(),
            };
            writeln!(out, "{}{}{}: {}", indent, node.name, suffix, node.type_name)?;
            for child in children {
                print_node(out, child, depth + 1)?;
            }
            Ok(())
        }
        value => writeln!(out, "{}{} = {}", indent, node.name, format_value(value)),
    }
}

fn format_value(value: &StructuredValue) -> String {
    match value {
        StructuredValue::Null => "NULL".to_string(),
        StructuredValue::Bool(b) => b.to_string(),
        StructuredValue::UInt(v) => v.to_string(),
        StructuredValue::Int(v) => v.to_string(),
        StructuredValue::Float(v) => v.to_string(),
        StructuredValue::String(s) => format!("{:?}", s),
        StructuredValue::Enum { label, .. } => label.clone(),
        StructuredValue::Flags { raw, labels } if labels.is_empty() => format!("{:#x}", raw),
        StructuredValue::Flags { labels, .. } => labels.clone(),
        StructuredValue::Resource(id) if id.is_null() => "VK_NULL_HANDLE".to_string(),
        StructuredValue::Resource(id) => id.to_string(),
        StructuredValue::Declared(id) => format!("{} (created)", id),
        StructuredValue::Buffer { size } => format!("<{} bytes>", size),
        StructuredValue::Struct(_) | StructuredValue::Array(_) => String::new(),
    }
}
