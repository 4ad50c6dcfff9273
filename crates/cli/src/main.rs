mod settings;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use fs_err as fs;
use seesaw_core::{EmbeddedImage, Scene, compute, render_html};
use seesaw_protocol::{BalanceInput, BalanceResult};
use serde::Serialize;

use settings::{Cli, Settings};

#[derive(Debug, Serialize)]
struct BalanceReport {
    input: BalanceInput,
    result: BalanceResult,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let settings = settings::load_settings(&cli).context("failed to load settings")?;
    let report = generate(&settings)?;

    if cli.print_balance {
        write_report(std::io::stdout().lock(), &report)?;
    }
    Ok(())
}

fn write_report(mut out: impl Write, report: &BalanceReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Read both images, compute the balance and write the animated page.
fn generate(settings: &Settings) -> Result<BalanceReport> {
    let good_image = load_image(&settings.good_image)?;
    let low_image = load_image(&settings.low_image)?;

    let input = BalanceInput::new(settings.good_count, settings.low_count)
        .with_config(settings.balance);
    let balance = compute(&input);
    log::info!(
        "good={} low={} tilt={:.2}deg good_scale={:.4} low_scale={:.4}",
        input.good_count,
        input.low_count,
        balance.tilt_degrees,
        balance.good_scale_factor,
        balance.low_scale_factor,
    );

    let scene = Scene {
        good_image,
        low_image,
        good_count: input.good_count,
        low_count: input.low_count,
        balance,
        style: settings.style.clone(),
    };
    let html = render_html(&scene);

    if let Some(parent) = settings.output.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&settings.output, html)?;
    log::info!(
        "Animated seesaw written to {}. Open it in a browser to see the animation.",
        settings.output.display()
    );

    Ok(BalanceReport {
        input,
        result: balance,
    })
}

fn load_image(path: &Path) -> Result<EmbeddedImage> {
    let bytes = fs::read(path)?;
    let image = EmbeddedImage::from_bytes(&bytes)
        .with_context(|| format!("failed to embed image {}", path.display()))?;
    log::debug!(
        "Embedded {} ({}, {} bytes)",
        path.display(),
        image.mime_type(),
        bytes.len()
    );
    Ok(image)
}
