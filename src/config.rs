use std::env;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::emit::OutputFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Face description file; unset means the builtin face
    pub face_path: Option<String>,
    /// Where to write the table; unset means stdout
    pub output_path: Option<String>,
    pub output_format: OutputFormat,
    /// Optional HH:MM to log an ASCII preview of the composed frame
    pub preview_time: Option<(u8, u8)>,
    /// Allow "HALF TO X" from minute 30 on (the firmware's ALLOW_HALF_TO
    /// build switch)
    pub allow_half_to: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let face_path = env::var("FACE_PATH").ok();
        let output_path = env::var("OUTPUT_PATH").ok();

        let output_format = env::var("OUTPUT_FORMAT")
            .unwrap_or_else(|_| "c".to_string())
            .parse()
            .context("OUTPUT_FORMAT must be c, rust or json")?;

        let preview_time = match env::var("PREVIEW_TIME") {
            Ok(raw) => Some(parse_time(&raw).context("PREVIEW_TIME must look like HH:MM")?),
            Err(_) => None,
        };

        let allow_half_to = env::var("ALLOW_HALF_TO")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .context("ALLOW_HALF_TO must be true or false")?;

        Ok(Config {
            face_path,
            output_path,
            output_format,
            preview_time,
            allow_half_to,
        })
    }
}

fn parse_time(raw: &str) -> Result<(u8, u8)> {
    let (h, m) = raw.split_once(':').context("missing ':'")?;
    let hour: u8 = h.trim().parse().context("bad hour")?;
    let minute: u8 = m.trim().parse().context("bad minute")?;
    anyhow::ensure!(hour < 24 && minute < 60, "time out of range");
    Ok((hour, minute))
}
