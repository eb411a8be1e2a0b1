use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use wirebuf_frame::FrameView;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput {
    frame_type: u8,
    payload_len: usize,
    wire_size: usize,
    payload: String,
    payload_hex: String,
}

pub fn print_frame(frame: &FrameView, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = FrameOutput {
                frame_type: frame.frame_type,
                payload_len: frame.payload.len(),
                wire_size: frame.wire_size(),
                payload: payload_preview(frame.payload.as_ref()),
                payload_hex: to_hex(frame.payload.as_ref()),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "LEN", "WIRE", "PAYLOAD"])
                .add_row(vec![
                    format!("0x{:02X}", frame.frame_type),
                    frame.payload.len().to_string(),
                    frame.wire_size().to_string(),
                    payload_preview(frame.payload.as_ref()),
                ]);
            println!("{table}");
        }
        OutputFormat::Raw => {
            print_raw(frame.payload.as_ref());
        }
    }
}

#[derive(Serialize)]
struct EncodeOutput {
    frame_type: u8,
    payload_len: usize,
    wire_size: usize,
    wire_hex: String,
}

/// Print a freshly encoded frame. Raw mode emits the full wire bytes
/// (header included), ready to pipe to a device.
pub fn print_encoded(frame: &FrameView, wire: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = EncodeOutput {
                frame_type: frame.frame_type,
                payload_len: frame.payload.len(),
                wire_size: frame.wire_size(),
                wire_hex: to_hex(wire),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "LEN", "WIRE", "HEX"])
                .add_row(vec![
                    format!("0x{:02X}", frame.frame_type),
                    frame.payload.len().to_string(),
                    frame.wire_size().to_string(),
                    to_hex(wire),
                ]);
            println!("{table}");
        }
        OutputFormat::Raw => {
            print_raw(wire);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn to_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 2);
    for b in data {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}
