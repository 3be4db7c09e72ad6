//! Command-line interface for lazy_color
//!
//! Prints every representation of a color, optionally after pushing its
//! brightness away from a second color.

use lazy_color::{Color, ContrastConfig};
use serde_json::json;
use std::{env, path::Path, process};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    let mut color_arg = None;
    let mut against_arg = None;
    let mut config = ContrastConfig::default();

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--against" => {
                against_arg = Some(next_value(&args, &mut i));
            }
            "--difference" => {
                let value = next_value(&args, &mut i);
                config.difference = value.parse().unwrap_or_else(|_| {
                    eprintln!("Error: '{}' is not a number", value);
                    process::exit(1);
                });
            }
            "--config" => {
                let path = next_value(&args, &mut i);
                config = ContrastConfig::from_json_file(Path::new(&path)).unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    process::exit(1);
                });
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if color_arg.is_none() {
                    color_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple colors provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let color_str = match color_arg {
        Some(color) => color,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let mut color = parse_or_exit(&color_str);

    if let Some(against_str) = against_arg {
        let against = parse_or_exit(&against_str);
        color.contrast_with(&against, &config);
    }

    let output = json!({
        "input": color_str,
        "hex": color.hex(),
        "rgb": color.rgb(),
        "rgba": color.rgba(),
        "hsv": color.hsv(),
        "alpha": color.alpha(),
    });

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn next_value(args: &[String], i: &mut usize) -> String {
    *i += 1;
    match args.get(*i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires a value", args[*i - 1]);
            process::exit(1);
        }
    }
}

fn parse_or_exit(input: &str) -> Color {
    Color::new(input).unwrap_or_else(|e| {
        eprintln!("Error: {}", e.user_message());
        process::exit(1);
    })
}

fn print_help(program: &str) {
    println!("Usage: {} <color> [options]", program);
    println!();
    println!("Colors:");
    println!("  #rgb, #rrggbb, rgb(r, g, b), rgba(r, g, b, a), hsv(h, s, v)");
    println!();
    println!("Options:");
    println!("  --against <color>     Push brightness away from this color");
    println!("  --difference <n>      Minimum hsv value gap (default 20)");
    println!("  --config <file.json>  Load contrast settings from JSON");
    println!("  -h, --help            Show this help");
    println!();
    println!("Set RUST_LOG=lazy_color=trace to see conversions as they happen.");
}
