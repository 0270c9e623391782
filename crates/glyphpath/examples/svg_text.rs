use glyphpath::{FontError, FontFile, FontOptions};

/// Prints an SVG document for a line of text.
///
/// Usage: `cargo run --example svg_text -- <font.ttf> [text] [point size]`
fn main() {
    let mut args = std::env::args().skip(1);
    let Some(font_path) = args.next() else {
        eprintln!("usage: svg_text <font.ttf> [text] [point size]");
        std::process::exit(2);
    };
    let text = args.next().unwrap_or_else(|| "Hello, world".to_string());
    let size = args.next().and_then(|s| s.parse().ok()).unwrap_or(32.0);

    let file = FontFile::open(&font_path).unwrap_or_else(|e| fail(&font_path, e));
    let mut font = file
        .font(FontOptions::new(size))
        .unwrap_or_else(|e| fail(&font_path, e));
    let baseline = f64::from(size) * 1.5;
    let path = font.create_text_path(&text, 0.0, baseline);
    println!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}"><path d="{}"/></svg>"#,
        path.width().ceil(),
        (baseline * 1.5).ceil(),
        path.to_svg_path_data()
    );
}

fn fail(font_path: &str, e: FontError) -> ! {
    eprintln!("{font_path}: {e}");
    std::process::exit(1);
}
