use glyphpath::TextPath;

/// Wraps a laid out path into a standalone SVG document.
pub fn svg_document(path: &TextPath, height: f64) -> String {
    let width = path.width().max(0.0).ceil();
    let height = height.max(0.0).ceil();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n  <path d=\"{}\"/>\n</svg>\n",
        path.to_svg_path_data()
    )
}
