use bytes::BytesMut;
use wirebuf_frame::decode_frame;

use crate::cmd::{parse_hex, DecodeArgs};
use crate::exit::{data_invalid, usage, CliResult, SUCCESS};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let raw = read_input(&args)?;
    let mut buf = BytesMut::from(raw.as_slice());

    let mut decoded = 0usize;
    while let Some(frame) = decode_frame(&mut buf) {
        print_frame(&frame, format);
        decoded += 1;
    }

    if !buf.is_empty() {
        if decoded == 0 {
            return Err(data_invalid(format!(
                "incomplete frame ({} bytes, no complete header+payload)",
                buf.len()
            )));
        }
        tracing::warn!(trailing = buf.len(), "trailing bytes after last frame");
    }

    if decoded == 0 {
        return Err(data_invalid("no frame bytes supplied"));
    }

    Ok(SUCCESS)
}

fn read_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return std::fs::read(path)
            .map_err(|err| usage(format!("cannot read {}: {err}", path.display())));
    }
    Err(usage("supply frame bytes as a hex argument or via --file"))
}
