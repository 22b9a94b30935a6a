use std::io::{self, Read};
use std::path::Path;

use coordex::{ExtractOptions, extract_bytes};

use crate::response::{ErrorResponse, ExtractionResponse};

/// Extract from a file (or stdin for `-`) and print the JSON document.
///
/// Input errors are printed as an error document and exit with code 1.
pub fn run(input: &Path, options: &ExtractOptions) -> Result<(), i32> {
    let bytes = read_input(input)?;

    let json = match extract_bytes(&bytes, options) {
        Ok(result) => serde_json::to_string_pretty(&ExtractionResponse::from(result)),
        Err(e) => {
            tracing::warn!(error = %e, "input refused");
            let doc = ErrorResponse {
                error: e.to_string(),
            };
            print_json(serde_json::to_string_pretty(&doc))?;
            return Err(1);
        }
    };
    print_json(json)
}

fn read_input(input: &Path) -> Result<Vec<u8>, i32> {
    if input == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(|e| {
            eprintln!("Error: failed to read stdin: {e}");
            1
        })?;
        return Ok(buf);
    }

    if !input.exists() {
        eprintln!("Error: file not found: {}", input.display());
        return Err(1);
    }
    std::fs::read(input).map_err(|e| {
        eprintln!("Error: failed to read {}: {e}", input.display());
        1
    })
}

fn print_json(json: serde_json::Result<String>) -> Result<(), i32> {
    let json = json.map_err(|e| {
        eprintln!("Error: failed to serialize result: {e}");
        1
    })?;
    println!("{json}");
    Ok(())
}
