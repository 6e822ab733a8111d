use std::fs;

use clap::Parser;
use jslet::interpreter::host::StdoutSink;

/// jslet runs scripts written in a small JavaScript subset: values,
/// arrays, objects, functions and closures, with output through `print`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells jslet to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut sink = StdoutSink;
    if let Err(e) = jslet::run(&script, &mut sink) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
