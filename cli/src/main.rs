//! `seal-render`: render a notary seal from a JSON request and print the
//! status object.

use std::io::Read;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use seal_core::core::{FontConfig, SealError, SealStatus};
use seal_core::{FontBook, SealComposer};

#[derive(Parser)]
#[command(version, about = "Render circle and rectangle notary seals to PNG")]
struct Cli {
    /// Request JSON. Read from --file, or stdin, when omitted
    request: Option<String>,

    /// Read the request JSON from a file ("-" for stdin)
    #[arg(short, long, value_name = "PATH", conflicts_with = "request")]
    file: Option<PathBuf>,

    /// Override the request's outFile
    #[arg(short, long, value_name = "PNG")]
    out: Option<PathBuf>,

    /// Regular serif face, registered as "Times New Roman"
    #[arg(long, env = "SEAL_SERIF_FONT", value_name = "TTF")]
    serif_font: Option<PathBuf>,

    /// Bold serif face
    #[arg(long, env = "SEAL_SERIF_BOLD_FONT", value_name = "TTF")]
    serif_bold_font: Option<PathBuf>,

    /// Regular sans face, registered as "Arial"
    #[arg(long, env = "SEAL_SANS_FONT", value_name = "TTF")]
    sans_font: Option<PathBuf>,

    /// Bold sans face
    #[arg(long, env = "SEAL_SANS_BOLD_FONT", value_name = "TTF")]
    sans_bold_font: Option<PathBuf>,

    /// Fail on families without an outline font instead of using the stroke font
    #[arg(long)]
    no_stroke_fallback: bool,
}

impl Cli {
    fn font_config(&self) -> FontConfig {
        let env = FontConfig::from_env();
        FontConfig {
            serif: self.serif_font.clone(),
            serif_bold: self.serif_bold_font.clone(),
            sans: self.sans_font.clone(),
            sans_bold: self.sans_bold_font.clone(),
            stroke_fallback: env.stroke_fallback && !self.no_stroke_fallback,
        }
    }

    fn read_request(&self) -> std::io::Result<String> {
        if let Some(json) = &self.request {
            return Ok(json.clone());
        }
        match &self.file {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
            _ => {
                let mut json = String::new();
                std::io::stdin().read_to_string(&mut json)?;
                Ok(json)
            }
        }
    }
}

/// Replace `outFile` when the request is a JSON object. Anything else is
/// passed through so the composer reports the parse error.
fn with_out_file(json: String, out: Option<&PathBuf>) -> String {
    let Some(out) = out else { return json };
    match serde_json::from_str::<serde_json::Value>(&json) {
        Ok(serde_json::Value::Object(mut map)) => {
            map.insert("outFile".into(), serde_json::Value::from(out.to_string_lossy().into_owned()));
            serde_json::Value::Object(map).to_string()
        }
        _ => json,
    }
}

fn finish(status: SealStatus) -> ! {
    println!("{}", status.to_json());
    process::exit(if status.status { 0 } else { 1 });
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let json = match cli.read_request() {
        Ok(json) => json,
        Err(e) => finish(SealStatus::failure(cli.out.clone(), &SealError::Io(e))),
    };

    let fonts = match FontBook::from_config(&cli.font_config()) {
        Ok(fonts) => fonts,
        Err(e) => {
            tracing::error!(error = %e, "font setup failed");
            finish(SealStatus::failure(cli.out.clone(), &e));
        }
    };
    tracing::debug!(faces = fonts.face_count(), "fonts ready");

    let composer = SealComposer::new(&fonts);
    finish(composer.render_json(&with_out_file(json, cli.out.as_ref())));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_file_override() {
        let json = r#"{"sealStyle":"circle","outFile":"a.png"}"#.to_string();
        let out = PathBuf::from("/tmp/b.png");
        let value: serde_json::Value = serde_json::from_str(&with_out_file(json, Some(&out))).unwrap();
        assert_eq!(value["outFile"], "/tmp/b.png");
        assert_eq!(value["sealStyle"], "circle");
    }

    #[test]
    fn test_override_leaves_malformed_json_alone() {
        let out = PathBuf::from("/tmp/b.png");
        assert_eq!(with_out_file("{oops".to_string(), Some(&out)), "{oops");
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["seal-render", "--out", "x.png", "{}"]).unwrap();
        assert_eq!(cli.request.as_deref(), Some("{}"));
        assert_eq!(cli.out, Some(PathBuf::from("x.png")));
        assert!(Cli::try_parse_from(["seal-render", "--file", "a.json", "{}"]).is_err());
    }
}
