use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{ArgAction, Parser};
use jsontree::{Indent, ParseOptions, Timings, Value, WriteOptions};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "jsontree", version, about = "Parse, query and reformat JSON documents")]
struct Args {
    /// Input file path. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Indentation size; 0 writes compact output (default: 2).
    #[arg(long, value_name = "number", default_value_t = 2)]
    indent: usize,

    /// Allow raw control characters inside strings.
    #[arg(long = "no-strict", action = ArgAction::SetFalse, default_value_t = true)]
    strict: bool,

    /// Maximum nesting depth of arrays and objects.
    #[arg(long = "max-depth", value_name = "number")]
    max_depth: Option<usize>,

    /// Print only the value at this JSON Pointer (e.g. /items/0/name).
    #[arg(long, value_name = "pointer")]
    get: Option<String>,

    /// Report read/parse/write timings on stderr.
    #[arg(long)]
    timings: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .without_time()
        .try_init();
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut timings = Timings::new();

    let input = timings.measure("read", || read_input(args.input.as_deref()))?;
    tracing::debug!(bytes = input.len(), "read input");

    let options = parse_options(args);
    let value = timings.measure("parse", || jsontree::parse_with_options(&input, &options))?;

    let selected = match args.get.as_deref() {
        Some(pointer) => value
            .pointer(pointer)
            .ok_or_else(|| format!("no value at pointer \"{pointer}\""))?,
        None => &value,
    };

    let write_options = write_options(args.indent);
    timings.measure("write", || {
        write_output(args.output.as_deref(), selected, &write_options)
    })?;

    if args.timings {
        eprint!("{timings}");
    }
    Ok(())
}

fn parse_options(args: &Args) -> ParseOptions {
    let mut options = ParseOptions::new().with_strict(args.strict);
    if let Some(max_depth) = args.max_depth {
        options = options.with_max_depth(max_depth);
    }
    options
}

fn write_options(indent: usize) -> WriteOptions {
    if indent == 0 {
        WriteOptions::compact()
    } else {
        WriteOptions::new().with_indent(Some(Indent::spaces(indent)))
    }
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(fs::read_to_string(path)?),
    }
}

fn write_output(
    path: Option<&str>,
    value: &Value,
    options: &WriteOptions,
) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) if path != "-" => {
            let mut file = fs::File::create(path)?;
            write_document(&mut file, value, options)
        }
        _ => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_document(&mut handle, value, options)
        }
    }
}

fn write_document(
    writer: &mut dyn Write,
    value: &Value,
    options: &WriteOptions,
) -> Result<(), Box<dyn Error>> {
    jsontree::to_writer_with_options(&mut *writer, value, options)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
