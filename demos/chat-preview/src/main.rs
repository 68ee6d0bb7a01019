//! chat-preview: decode a wire string and show its structure.
//!
//! ```text
//! chat-preview [--codec interactive|classic|plain] [--json] <wire text>
//! ```
//!
//! Set `RUST_LOG=chatwire=debug` to watch the codec at work.

use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use chatwire::{
    ClassicCodec, InteractiveCodec, MessageCodec, PlainTextCodec, Section,
    SendableMessage,
};

// ---------------------------------------------------------------------------
// Argument handling
// ---------------------------------------------------------------------------

struct Args {
    codec: Box<dyn MessageCodec>,
    codec_name: String,
    json: bool,
    wire: String,
}

fn parse_args() -> Result<Args, String> {
    let mut codec: Box<dyn MessageCodec> = Box::new(InteractiveCodec);
    let mut codec_name = "interactive".to_owned();
    let mut json = false;
    let mut wire = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--codec" => {
                let name = args
                    .next()
                    .ok_or_else(|| "--codec needs a value".to_owned())?;
                codec = match name.as_str() {
                    "interactive" => Box::new(InteractiveCodec),
                    "classic" => Box::new(ClassicCodec),
                    "plain" => Box::new(PlainTextCodec),
                    other => {
                        return Err(format!("unknown codec `{other}`"));
                    }
                };
                codec_name = name;
            }
            "--json" => json = true,
            _ => wire = Some(arg),
        }
    }

    let wire = wire.ok_or_else(|| {
        "usage: chat-preview [--codec interactive|classic|plain] [--json] <wire text>"
            .to_owned()
    })?;
    Ok(Args {
        codec,
        codec_name,
        json,
        wire,
    })
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

fn print_section(index: usize, section: &Section) {
    println!("section {index}:");
    for component in &section.contents {
        println!(
            "  run {:?}  colour={}  styles={:?}",
            component.text, component.colour, component.styles
        );
    }
    if let Some(hover) = &section.hover {
        let text: String =
            hover.iter().map(|c| c.text.as_str()).collect();
        println!("  hover: {text:?} ({} runs)", hover.len());
    }
    if let Some(click) = &section.click {
        println!("  click: {:?} {:?}", click.click_type, click.value);
    }
    if let Some(insertion) = &section.insertion {
        println!("  insertion: {insertion:?}");
    }
}

fn print_message(message: &SendableMessage, json: bool) -> ExitCode {
    if json {
        match serde_json::to_string_pretty(message) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }
    for (index, section) in message.sections.iter().enumerate() {
        print_section(index, section);
    }
    println!("plain text: {:?}", message.plain_text());
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    info!(codec = %args.codec_name, bytes = args.wire.len(), "decoding");
    match args.codec.decode(&args.wire) {
        Ok(message) => print_message(&message, args.json),
        Err(err) => {
            eprintln!("decode error: {err}");
            ExitCode::FAILURE
        }
    }
}
