use std::path::PathBuf;

use clap::Parser;

mod keymap;
mod run;

/// Runs a Chip-8 ROM in an SDL window
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Path to the ROM image
    rom: PathBuf,

    /// Milliseconds to sleep between steps (F1/F2 adjust it at runtime)
    #[arg(short, long, default_value_t = 5)]
    delay: u64,

    /// Size of each Chip-8 pixel in screen pixels
    #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=64))]
    scale: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run::run(&args.rom, args.delay, args.scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chip8", "pong.ch8"]).unwrap();
        assert_eq!(args.rom, PathBuf::from("pong.ch8"));
        assert_eq!(args.delay, 5);
        assert_eq!(args.scale, 10);
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from(["chip8", "-d", "0", "--scale", "4", "t.ch8"]).unwrap();
        assert_eq!(args.delay, 0);
        assert_eq!(args.scale, 4);
    }

    #[test]
    fn test_rom_is_required() {
        assert!(Args::try_parse_from(["chip8"]).is_err());
        assert!(Args::try_parse_from(["chip8", "--scale", "0", "t.ch8"]).is_err());
    }
}
