// src/bin/recover_key.rs
//! Recover a plaintext key from an encoded hint-XOR blob given as hex

use anyhow::{Context, Result};
use crimsonkey_rs::{decrypt, Verbosity};
use secure_gate::RevealSecret;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: recover_key [HEX BYTES]");
        println!();
        println!("Accepts the blob exactly as encode_key prints it (0x3c, 0xf8, ...)");
        println!("or as a bare hex string (3cf8...). Reads stdin when no bytes are given.");
        return Ok(());
    }

    let raw = if args.is_empty() {
        print!("Enter encrypted bytes (hex): ");
        std::io::stdout().flush()?;
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        line
    } else {
        args.join(" ")
    };

    let cleaned = clean_hex(&raw);
    if cleaned.is_empty() {
        anyhow::bail!("no input bytes given");
    }
    let encrypted = hex::decode(&cleaned).context("input is not valid hex")?;

    let key = decrypt(&encrypted, Verbosity::default())
        .with_context(|| format!("could not recover a key from {} byte(s)", encrypted.len()))?;

    let plain = key.expose_secret();
    match std::str::from_utf8(plain) {
        Ok(text) => println!("Decrypted key: {text}"),
        Err(_) => println!("Decrypted key: (not valid UTF-8)"),
    }
    let bytes = plain
        .iter()
        .map(|byte| format!("0x{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("Decrypted bytes: {bytes}");

    Ok(())
}

/// Strip separators and `0x` prefixes so `hex::decode` gets a bare digit string.
fn clean_hex(raw: &str) -> String {
    raw.split([' ', ',', '\t', '\r', '\n'])
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .strip_prefix("0x")
                .or_else(|| token.strip_prefix("0X"))
                .unwrap_or(token)
        })
        .collect()
}
