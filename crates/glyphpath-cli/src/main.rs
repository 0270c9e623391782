use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glyphpath::{FontFile, FontOptions, PathOp};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::svg::svg_document;
mod svg;

#[derive(Parser)]
#[command(name = "glyphpath", about = "TrueType text to vector paths")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(clap::Args)]
struct Layout {
    #[arg(short, long)]
    font: PathBuf,
    #[arg(short, long)]
    text: String,
    /// Point size
    #[arg(short, long, default_value = "12")]
    size: f32,
    #[arg(long, default_value_t = glyphpath::units::DEFAULT_DPI)]
    dpi: u32,
    /// Pen start, x
    #[arg(long, default_value = "0")]
    x: f64,
    /// Pen start (baseline), y
    #[arg(long)]
    y: Option<f64>,
}

impl Layout {
    fn options(&self) -> FontOptions {
        FontOptions::new(self.size).with_dpi(self.dpi)
    }

    /// Baseline defaults to one em below the top edge.
    fn baseline(&self) -> f64 {
        self.y
            .unwrap_or_else(|| f64::from(self.options().scale()) / 64.0)
    }
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the path commands for a string
    Path {
        #[command(flatten)]
        layout: Layout,
    },
    /// Write an SVG document drawing a string
    Svg {
        #[command(flatten)]
        layout: Layout,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Inspect font metadata
    Inspect {
        #[arg(short, long)]
        font: PathBuf,
    },
}

fn open(path: &Path) -> Result<FontFile> {
    FontFile::open(path).with_context(|| format!("loading {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.command {
        Cmd::Path { layout } => {
            let file = open(&layout.font)?;
            let mut font = file.font(layout.options())?;
            let path = font.try_create_text_path(&layout.text, layout.x, layout.baseline())?;
            for op in path.ops() {
                match op {
                    PathOp::MoveTo(p) => println!("M {} {}", p.x, p.y),
                    PathOp::LineTo(p) => println!("L {} {}", p.x, p.y),
                    PathOp::QuadCurveTo { to, control } => {
                        println!("Q {} {} {} {}", control.x, control.y, to.x, to.y)
                    }
                }
            }
            println!("width {}", path.width());
        }
        Cmd::Svg { layout, output } => {
            let file = open(&layout.font)?;
            let mut font = file.font(layout.options())?;
            // unlike `path`, draw whatever was laid out before a broken glyph
            let path = font.create_text_path(&layout.text, layout.x, layout.baseline());
            let doc = svg_document(&path, layout.baseline() * 1.25);
            match output {
                Some(output) => {
                    fs::write(&output, doc)?;
                    eprintln!("Wrote {} ops -> {}", path.len(), output.display());
                }
                None => print!("{doc}"),
            }
        }
        Cmd::Inspect { font } => {
            let file = open(&font)?;
            let source = file.source()?;
            println!("TrueType font: {}", font.display());
            println!("  Glyphs: {}", source.num_glyphs());
            println!("  Units per em: {}", source.units_per_em());
        }
    }
    Ok(())
}
