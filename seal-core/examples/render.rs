//! Seal Rendering Example
//!
//! Renders one round seal and one rectangular stamp into a directory.
//!
//! Usage:
//!     cargo run --example render -- [output_dir]
//!
//! Outline fonts are picked up from SEAL_SERIF_FONT, SEAL_SANS_FONT and their
//! _BOLD_ variants; without them the built-in stroke font is used.

use seal_core::core::{CircleSeal, FontConfig, RectangleSeal};
use seal_core::{FontBook, SealComposer, SealRequest};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let out_dir = env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let fonts = FontBook::from_config(&FontConfig::from_env())?;
    println!("Loaded {} outline font(s)", fonts.face_count());
    let composer = SealComposer::new(&fonts);

    let requests = [
        SealRequest::Circle(CircleSeal::new(
            "STATE OF NEW YORK",
            "COUNTY OF KINGS",
            "1234567",
            "05/01/2030",
            out_dir.join("circle-seal.png"),
        )),
        SealRequest::Rectangle(RectangleSeal::new(
            "Notary Public",
            "State of Texas",
            "Mercedes Smith",
            "1234567",
            "05/01/2030",
            out_dir.join("rectangle-seal.png"),
        )),
    ];

    for request in &requests {
        let status = composer.render(request);
        println!("{}", status.to_json());
        if !status.status {
            std::process::exit(1);
        }
    }

    Ok(())
}
