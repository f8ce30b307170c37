//! Command-line argument definitions for the Apollon CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, rendering overrides and logging verbosity.

use clap::Parser;

use apollon::geometry::Point;

/// Command-line arguments for the Apollon diagram renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model
    #[arg(help = "Path to the input JSON model")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Font size override, in pixels
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Translation applied to every drawn item, as `X,Y`
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    pub offset: Option<Point>,
}

fn parse_offset(value: &str) -> Result<Point, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `X,Y`, got `{value}`"))?;
    let coordinate = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|err| format!("invalid coordinate `{part}`: {err}"))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset() {
        assert_eq!(parse_offset("10,-5.5"), Ok(Point::new(10.0, -5.5)));
        assert_eq!(parse_offset(" 3 , 4 "), Ok(Point::new(3.0, 4.0)));
        assert!(parse_offset("10").is_err());
        assert!(parse_offset("a,1").is_err());
    }

    #[test]
    fn test_args_overrides() {
        let args = Args::parse_from([
            "apollon",
            "model.json",
            "-o",
            "diagram.svg",
            "--font-size",
            "16",
            "--offset",
            "-20,40",
        ]);
        assert_eq!(args.input, "model.json");
        assert_eq!(args.output, "diagram.svg");
        assert_eq!(args.font_size, Some(16.0));
        assert_eq!(args.offset, Some(Point::new(-20.0, 40.0)));
        assert_eq!(args.log_level, "info");
    }
}
