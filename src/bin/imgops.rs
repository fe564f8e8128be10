use std::env;
use std::process;

use anyhow::Result;
use imgops::{cli, display, loader, output, transform};

const OUTPUT_PATH: &str = "output.png";

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Some(first) = args.get(1) {
        if first == "--help" || first == "-h" {
            cli::print_usage(&args[0]);
            return;
        }
    }

    let invocation = match cli::parse_args(&args) {
        Ok(inv) => inv,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            cli::print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = run(&invocation) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(invocation: &cli::Invocation) -> Result<()> {
    let original = loader::load(&invocation.path);

    let result = transform::apply(&invocation.operation, &original);

    display::show_previews(&[("Original", &original), ("Result", &result)])?;

    // Decode and write failures degrade to a warning, not a process error.
    match output::write_png(&result, OUTPUT_PATH) {
        Ok(true) => {}
        Ok(false) => eprintln!("Warning: no result image, {} not written", OUTPUT_PATH),
        Err(e) => eprintln!("Warning: {:#}", e),
    }

    Ok(())
}
