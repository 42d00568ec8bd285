use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use figcanvas::{export, render_colored, AnsiColor, Canvas, FigFont, FigRenderer};
use std::fs;
use std::io::Write;

#[derive(Parser)]
#[command(name = "figcanvas", about = "FIGlet canvas renderer")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text with a FIGlet font
    Render {
        #[arg(short, long)]
        font: String,
        #[arg(short, long)]
        text: String,
        /// Export format (html3, ansi, text)
        #[arg(long, default_value = "ansi")]
        format: String,
        #[arg(long, default_value = "white")]
        fg: String,
        #[arg(long, default_value = "transparent")]
        bg: String,
        /// Cycle the foreground palette per glyph
        #[arg(long)]
        cycle: bool,
    },
    /// Inspect font metadata
    Inspect {
        #[arg(short, long)]
        font: String,
    },
}

fn load_font(path: &str) -> Result<FigFont> {
    let bytes = fs::read(path).with_context(|| format!("reading font {path}"))?;
    FigFont::from_bytes(&bytes).with_context(|| format!("loading font {path}"))
}

fn color_arg(name: &str) -> Result<AnsiColor> {
    match AnsiColor::from_name(name) {
        Some(color) => Ok(color),
        None => bail!("unknown color {name:?}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render {
            font,
            text,
            format,
            fg,
            bg,
            cycle,
        } => {
            let fig = load_font(&font)?;
            let mut canvas = Canvas::default();
            if cycle {
                render_colored(&mut canvas, &fig, &text);
            } else {
                canvas.set_color(color_arg(&fg)?, color_arg(&bg)?);
                let mut renderer = FigRenderer::new(&fig);
                renderer.put_str(&mut canvas, &text);
            }
            let out = export(&canvas, &format)?;
            std::io::stdout().write_all(&out)?;
        }
        Cmd::Inspect { font } => {
            let fig = load_font(&font)?;
            let header = fig.header();
            println!("FIGlet font: {font}");
            println!("  Height: {}", header.height());
            println!("  Baseline: {}", header.baseline());
            println!("  Hard blank: {:?}", header.hard_blank_char());
            println!("  Layout: {:?}", header.horiz_layout());
            println!("  Smushing rules: {:?}", header.horizontal_smushing());
            println!("  Defined characters: {}", fig.glyph_count());
        }
    }
    Ok(())
}
