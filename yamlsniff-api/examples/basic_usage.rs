//! Basic usage example

use yamlsniff_api::{auto_decode, detect_encoding, Config, ErrorPolicy, Input, TextDecoder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience functions
    println!("=== Method 1: Convenience Functions ===");
    let bytes = [0xFF, 0xFE, b'k', 0x00, b':', 0x00, b' ', 0x00, b'v', 0x00];
    println!("Detected {}", detect_encoding(&bytes));
    println!("Decoded {:?}\n", auto_decode(&bytes)?);

    // Method 2: Error policies
    println!("=== Method 2: Error Policies ===");
    let broken = b"key: \xffvalue";
    for policy in ErrorPolicy::LENIENT {
        let decoder = TextDecoder::with_policy(policy);
        let output = decoder.decode_bytes(broken)?;
        println!("  {policy:>16}: {:?}", output.text);
    }

    // Method 3: Configuration and metadata
    println!("\n=== Method 3: Configuration ===");
    let config = Config::builder().errors_named("replace")?.build()?;
    let decoder = TextDecoder::with_config(config);
    let output = decoder.process(Input::from_bytes(b"a: 1\nb: 2\n".to_vec()))?;

    println!(
        "{} lines, {} chars, encoding {}",
        output.metadata.line_count, output.metadata.total_chars, output.metadata.encoding
    );
    for line in output.lines() {
        println!("  {line}");
    }

    Ok(())
}
