use bytes::BytesMut;
use wirebuf_frame::{encode_frame, FrameView};

use crate::cmd::{parse_hex, EncodeArgs};
use crate::exit::{data_invalid, usage, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = read_payload(&args)?;

    let mut wire = BytesMut::new();
    encode_frame(args.frame_type, &payload, &mut wire)
        .map_err(|err| data_invalid(err.to_string()))?;

    let view = FrameView::new(args.frame_type, payload);
    tracing::debug!(
        frame_type = view.frame_type,
        wire_size = view.wire_size(),
        "frame encoded"
    );
    print_encoded(&view, &wire, format);

    Ok(SUCCESS)
}

fn read_payload(args: &EncodeArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return std::fs::read(path)
            .map_err(|err| usage(format!("cannot read {}: {err}", path.display())));
    }
    Ok(Vec::new())
}
