// src/bin/encode_key.rs
//! Crimson Key encoder: plaintext key in, paste-ready hint-XOR blob out

use anyhow::Result;
use crimsonkey_rs::aliases::PlainKey;
use crimsonkey_rs::consts::MIN_KEY_LEN;
use crimsonkey_rs::encrypt;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        None => run_interactive()?,
        Some("--key") => {
            let key = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("--key requires a value"))?;
            process_key(&key);
        }
        Some("--help") | Some("-h") => print_usage(),
        Some(other) => {
            print_usage();
            anyhow::bail!("unknown argument: {other}");
        }
    }

    Ok(())
}

fn print_usage() {
    println!("Usage: encode_key [--key <KEY>]");
    println!();
    println!("Encode your key to be later decoded using brute force - no plain keys in my binary.");
    println!("Without --key, runs an interactive prompt loop.");
}

fn run_interactive() -> Result<()> {
    println!("[*] Crimson Key Encoder - Interactive Mode");
    println!("[*] Enter keys to encrypt, or type 'exit', 'quit', or 'q' to stop");
    println!();

    loop {
        print!("Enter key to encrypt: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            println!();
            println!("[*] End of input. Goodbye!");
            break;
        }

        let key = line.trim();
        if matches!(
            key.to_ascii_lowercase().as_str(),
            "exit" | "quit" | "q" | ":q!" | "qa!"
        ) {
            println!("[*] Goodbye!");
            break;
        }
        if key.is_empty() {
            eprintln!("[-] Empty input. Please enter a key or 'exit' to quit.");
            continue;
        }

        process_key(key);
        println!();
    }

    Ok(())
}

/// Encode one key and print the blob in source-paste form.
fn process_key(key: &str) {
    if !key.is_ascii() {
        eprintln!("[-] Key contains non-ASCII characters. Please use ASCII characters only.");
        return;
    }
    if key.len() < MIN_KEY_LEN {
        eprintln!(
            "[-] Key is too short! Minimum length is {MIN_KEY_LEN} bytes, got {} bytes",
            key.len()
        );
        return;
    }

    println!("[+] Key to encode: {key}");
    println!("[*] Encrypting key...");

    let plain = PlainKey::new(key.as_bytes().to_vec());
    match encrypt(&plain) {
        Ok(encoded) => {
            println!("[*] Hint byte: 0x{:02x}", encoded[0]);
            let blob = encoded
                .iter()
                .map(|byte| format!("0x{byte:02x}"))
                .collect::<Vec<_>>()
                .join(", ");
            println!("[+] Encrypted key is: {blob}");
        }
        Err(e) => eprintln!("[-] {e}"),
    }
}
