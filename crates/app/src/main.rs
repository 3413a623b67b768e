//! Interactive Huffman compressor/decompressor.
//!
//! Presents a three-option menu: compress a file to a `.cpm` container,
//! decompress a container, or exit. Operation failures are printed and
//! the menu continues; only `0` (or end of input) terminates.

mod ops;
mod paths;

use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() {
    println!("============================================");
    println!("  huffpack: Huffman compressor (.cpm)");
    println!("============================================");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        println!("MENU:");
        println!("  1. Compress a file   (file.ext -> file.cpm)");
        println!("  2. Decompress a file (file.cpm -> file-decompressed.ext)");
        println!("  0. Exit");
        print!("Select an option: ");

        let Some(choice) = read_line(&mut lines) else {
            break;
        };

        match choice.as_str() {
            "1" => {
                print!("Path of the file to compress: ");
                let Some(path) = read_line(&mut lines) else {
                    break;
                };
                match ops::compress_file(Path::new(&path)) {
                    Ok(container) => {
                        println!("File compressed successfully.");
                        println!("  input:     {path}");
                        println!("  container: {}", container.display());
                    }
                    Err(err) => eprintln!("Compression failed: {err}"),
                }
            }
            "2" => {
                print!("Path of the .cpm container: ");
                let Some(path) = read_line(&mut lines) else {
                    break;
                };
                match ops::decompress_file(Path::new(&path)) {
                    Ok(output) => {
                        println!("File decompressed successfully.");
                        println!("  container: {path}");
                        println!("  output:    {}", output.display());
                    }
                    Err(err) => eprintln!("Decompression failed: {err}"),
                }
            }
            "0" => {
                println!("Exiting.");
                break;
            }
            other => {
                println!("Invalid option {other:?}. Try again.");
            }
        }
    }
}

/// Read one trimmed line from stdin, flushing the pending prompt first.
/// Returns `None` on end of input or a read error.
fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    io::stdout().flush().ok();
    let line = lines.next()?.ok()?;
    Some(line.trim().to_string())
}
