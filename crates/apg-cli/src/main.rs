//! `apg`: render an album poster, preview it, and export it as PNG.

mod cli;
mod config;
#[cfg(feature = "preview")]
mod preview;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use apg_core::{AlbumInfo, ApgError, ArgumentError};
use apg_export::export_poster;
use apg_layout::{compute_poster_layout, CanvasGeometry};
use apg_render_2d::{build_scene, load_cover_art, FontBook, RenderTarget, SoftwareRenderer};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use glam::Vec2;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(Some(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(None) => ExitCode::SUCCESS,
        Err(ApgError::Argument(e)) => usage_error(&e).exit(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Report a bad argument the way clap reports its own parse errors, with usage.
fn usage_error(error: &ArgumentError) -> clap::Error {
    Cli::command().error(ErrorKind::ValueValidation, error)
}

/// Run one poster generation, returning the exported path if any.
fn run(cli: &Cli) -> Result<Option<PathBuf>, ApgError> {
    cli.validate()?;
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let album = AlbumInfo::load(&cli.info)?;
    let fonts = FontBook::load(&cli.title_font, &cli.body_font)?;

    let geometry = CanvasGeometry::new(&config.poster);
    let side = geometry.cover_side();
    let cover = load_cover_art(&cli.artwork, side as u32)?;

    let layout = compute_poster_layout(&album, Vec2::splat(side), &config.poster, &fonts)?;
    log::info!(
        "Laid out {} tracks in {} rows at {}px",
        album.track_names.len(),
        layout.columns.count,
        layout.track_font_size
    );

    let scene = build_scene(&layout, Arc::new(cover), &config.render);
    let mut target = RenderTarget::new(config.poster.poster_width, config.poster.poster_height);
    SoftwareRenderer::new().render(&scene, &fonts, &mut target)?;

    if !cli.no_preview {
        show_preview(&target, &album)?;
    }

    if cli.no_export {
        return Ok(None);
    }
    let path = export_poster(&target, &album, &cli.output_dir)?;
    Ok(Some(path))
}

#[cfg(feature = "preview")]
fn show_preview(target: &RenderTarget, album: &AlbumInfo) -> Result<(), ApgError> {
    let title = format!("APG - {} by {}", album.album_name, album.artist_name);
    preview::show(target, &title)?;
    Ok(())
}

#[cfg(not(feature = "preview"))]
fn show_preview(_target: &RenderTarget, _album: &AlbumInfo) -> Result<(), ApgError> {
    log::warn!("Built without the preview window; exporting directly");
    Ok(())
}
