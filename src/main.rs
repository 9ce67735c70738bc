use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: chordshift <semitones> <input> [output]");
        eprintln!("       chordshift --stored <input> [output]");
        process::exit(1);
    }

    let (semitones, input_path, output_path) = if args[1] == "--stored" {
        (None, &args[2], args.get(3))
    } else {
        let offset = match args[1].parse::<i32>() {
            Ok(offset) => offset,
            Err(_) => {
                eprintln!(
                    "Invalid semitone offset '{}': expected a signed integer",
                    args[1]
                );
                process::exit(1);
            }
        };
        (Some(offset), &args[2], args.get(3))
    };

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", input_path, e);
            process::exit(1);
        }
    };

    // Transpose
    let result = match semitones {
        Some(offset) => chordshift::transpose_sheet(&source, offset),
        None => chordshift::transpose_sheet_stored(&source),
    };

    let transposed = match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &transposed) {
                eprintln!("Error writing to '{}': {}", path, e);
                process::exit(1);
            }
            eprintln!("Wrote transposed sheet to {}", path);
        }
        None => {
            print!("{}", transposed);
        }
    }
}
