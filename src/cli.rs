use clap::{Parser, ValueEnum};
use log::LevelFilter;

use lightfan::camera::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use lightfan::vector::{Vec2, Vec3};

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Debug, Parser)]
#[command(name = "lightfan")]
#[command(about = "Ray trace a sphere lit by a draggable point light and save the frame")]
pub struct Args {
    /// Set the logging level (defaults to "info")
    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, help = "Image height in pixels")]
    pub height: u32,

    /// Initial light position as X,Y,Z in world units
    #[arg(long, default_value = "3,0,-5", value_parser = parse_vec3, allow_hyphen_values = true)]
    pub light: Vec3,

    /// Pointer gesture: the first point presses, the rest drag, then release
    #[arg(long = "drag", value_name = "X,Y", value_parser = parse_vec2, allow_hyphen_values = true)]
    pub drag: Vec<Vec2>,

    /// Save only the ray traced sphere, without rays or the light glyph
    #[arg(long)]
    pub no_overlay: bool,

    /// Output file path (.png)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png)")]
    pub output: String,
}

fn parse_components<const N: usize>(value: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got '{value}'"));
    }

    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{part}': {e}"))?;
    }
    Ok(out)
}

/// Parse "X,Y,Z"
pub fn parse_vec3(value: &str) -> Result<Vec3, String> {
    parse_components::<3>(value).map(Vec3::from_array)
}

/// Parse "X,Y"
pub fn parse_vec2(value: &str) -> Result<Vec2, String> {
    parse_components::<2>(value).map(Vec2::from_array)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vectors() {
        assert_eq!(parse_vec3("3,0,-5"), Ok(Vec3::new(3.0, 0.0, -5.0)));
        assert_eq!(parse_vec3(" 1.5, -2 ,4"), Ok(Vec3::new(1.5, -2.0, 4.0)));
        assert_eq!(parse_vec2("840,400"), Ok(Vec2::new(840.0, 400.0)));
        assert!(parse_vec3("1,2").is_err());
        assert!(parse_vec2("a,b").is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lightfan"]);
        assert_eq!(args.width, 1200);
        assert_eq!(args.height, 800);
        assert_eq!(args.light, Vec3::new(3.0, 0.0, -5.0));
        assert!(args.drag.is_empty());
        assert!(!args.no_overlay);
    }

    #[test]
    fn test_drag_gesture() {
        let args = Args::parse_from([
            "lightfan", "--drag", "840,400", "--drag", "300,200", "--light", "-1,1,-6",
        ]);
        assert_eq!(args.drag, vec![Vec2::new(840.0, 400.0), Vec2::new(300.0, 200.0)]);
        assert_eq!(args.light, Vec3::new(-1.0, 1.0, -6.0));
    }
}
