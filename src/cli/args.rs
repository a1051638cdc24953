//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub profile_path: Option<PathBuf>,
    pub assets_dir: PathBuf,
    pub fps: u32,
    pub reduced_motion: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("folio-tui - Scroll-driven personal portfolio for the terminal");
    eprintln!();
    eprintln!("Usage: folio-tui [profile.json] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [profile.json]    Path to the profile file");
    eprintln!("                    If omitted, looks for ./profile.json, then");
    eprintln!("                    <config-dir>/folio/profile.json, then the");
    eprintln!("                    built-in sample profile");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --assets <DIR>     Base directory for photo/logo/resume paths (default: .)");
    eprintln!("  --fps <N>          Target frame rate (default: 30)");
    eprintln!("  --reduced-motion   Disable smooth scrolling and jump instead");
    eprintln!("  -h, --help         Show this help message");
    eprintln!("  -V, --version      Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  folio-tui                          # Discover a profile automatically");
    eprintln!("  folio-tui me.json                  # Use a specific profile");
    eprintln!("  folio-tui me.json --assets ~/www   # Resolve assets under ~/www");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut profile_path: Option<PathBuf> = None;
    let mut assets_dir = PathBuf::from(".");
    let mut fps: u32 = 30;
    let mut reduced_motion = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("folio-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "--reduced-motion" {
            reduced_motion = true;
            i += 1;
        } else if arg == "--assets" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --assets",
                ));
            }
            assets_dir = PathBuf::from(&args[i]);
            i += 1;
        } else if arg == "--fps" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --fps",
                ));
            }
            fps = args[i].parse().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Invalid fps value: {}", args[i]),
                )
            })?;
            if fps == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "fps must be at least 1",
                ));
            }
            i += 1;
        } else if !arg.starts_with('-') {
            profile_path = Some(PathBuf::from(arg));
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        profile_path,
        assets_dir,
        fps,
        reduced_motion,
    })
}
