//! SVG output of guides and composed pages
//!
//! This module serializes the declarative descriptors to SVG markup:
//! - A single cell guide, as a standalone document
//! - A full page: guides, glyphs and pinyin labels at their placements

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::decorate::DecoratedPage;
use crate::guide::{GuideDescriptor, GuideElement, GuideShape, Stroke};
use crate::layout::PlacedCell;
use crate::sheet::Sheet;
use crate::style::{GlyphStyle, WritingMode};
use crate::types::*;

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const GUIDE_ID: &str = "cell-guide";

/// Render one cell guide as a standalone SVG document
pub fn guide_to_svg(guide: &GuideDescriptor) -> String {
    let size = num(guide.size);
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="{SVG_NS}" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    push_guide_elements(&mut svg, guide);
    svg.push_str("</svg>\n");

    svg
}

/// Render a composed page as an SVG document.
///
/// The guide is defined once and instanced at every placement.
///
/// # Arguments
/// * `placements` - Cell rectangles, in the same order as `decorated.cells`
/// * `decorated` - Guide and glyphs of the page
/// * `page_px` - Page (width, height) in pixels
pub fn page_to_svg(
    placements: &[PlacedCell],
    decorated: &DecoratedPage,
    page_px: (f32, f32),
) -> String {
    let (width, height) = (num(page_px.0), num(page_px.1));
    let mut svg = String::new();

    let _ = writeln!(
        svg,
        r#"<svg xmlns="{SVG_NS}" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    svg.push_str("<defs>\n");
    let _ = writeln!(svg, r#"<g id="{GUIDE_ID}">"#);
    push_guide_elements(&mut svg, &decorated.guide);
    svg.push_str("</g>\n</defs>\n");

    for (placed, cell) in placements.iter().zip(&decorated.cells) {
        let (x, y) = (placed.rect.x, placed.rect.y);
        let _ = writeln!(
            svg,
            r##"<use href="#{GUIDE_ID}" xlink:href="#{GUIDE_ID}" x="{}" y="{}"/>"##,
            num(x),
            num(y)
        );

        if let Some(glyph) = cell.glyph.as_ref().filter(|_| !cell.cell.is_space()) {
            push_text(&mut svg, &cell.cell.character, glyph, x, y);
        }
        if let Some(label) = &cell.pinyin {
            push_text(&mut svg, &label.text, &label.style, x, y);
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write every page of `sheet` as `<stem>-<n>.svg` into `dir`
pub async fn save_svg_pages(
    sheet: &Sheet,
    dir: impl AsRef<Path>,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    if sheet.pages.is_empty() {
        return Err(SheetError::NoPages);
    }

    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(sheet.pages.len());
    for page in &sheet.pages {
        let svg = page_to_svg(&page.placements, &page.decorated, sheet.page_px);
        let path = dir.join(format!("{}-{}.svg", stem, page.number));
        tokio::fs::write(&path, svg).await?;
        log::debug!("Wrote page {} to {}", page.number, path.display());
        written.push(path);
    }

    log::info!("Wrote {} page(s) to {}", written.len(), dir.display());
    Ok(written)
}

// ============================================================================
// Element helpers
// ============================================================================

fn push_guide_elements(svg: &mut String, guide: &GuideDescriptor) {
    for element in &guide.elements {
        push_element(svg, element);
    }
}

fn push_element(svg: &mut String, element: &GuideElement) {
    let stroke = stroke_attrs(&element.stroke);
    let _ = match element.shape {
        GuideShape::Line { from, to } => writeln!(
            svg,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {stroke}/>"#,
            num(from.x),
            num(from.y),
            num(to.x),
            num(to.y)
        ),
        GuideShape::Rect {
            origin,
            width,
            height,
        } => writeln!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" {stroke}/>"#,
            num(origin.x),
            num(origin.y),
            num(width),
            num(height)
        ),
        GuideShape::Circle { center, radius } => writeln!(
            svg,
            r#"<circle cx="{}" cy="{}" r="{}" fill="none" {stroke}/>"#,
            num(center.x),
            num(center.y),
            num(radius)
        ),
    };
}

fn stroke_attrs(stroke: &Stroke) -> String {
    let mut attrs = format!(
        r#"stroke="{}" stroke-width="{}""#,
        escape(&stroke.color),
        num(stroke.width)
    );
    let dash = match stroke.line_style {
        LineStyle::Solid => None,
        LineStyle::Dashed => Some((stroke.width * 4.0, stroke.width * 2.0)),
        LineStyle::Dotted => Some((stroke.width, stroke.width)),
    };
    if let Some((on, off)) = dash {
        let _ = write!(attrs, r#" stroke-dasharray="{} {}""#, num(on), num(off));
    }
    attrs
}

fn push_text(svg: &mut String, text: &str, style: &GlyphStyle, cell_x: f32, cell_y: f32) {
    let anchor = style.effective_anchor();
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-family="{}" font-size="{}" fill="{}""#,
        num(cell_x + anchor.x),
        num(cell_y + anchor.y),
        escape(&style.font_family),
        num(style.font_size_px),
        escape(&style.color)
    );
    if style.opacity < 1.0 {
        let _ = write!(svg, r#" fill-opacity="{}""#, num(style.opacity));
    }
    if style.writing_mode == WritingMode::VerticalRl {
        svg.push_str(r#" writing-mode="vertical-rl""#);
    }
    let _ = writeln!(
        svg,
        r#" text-anchor="middle" dominant-baseline="central">{}</text>"#,
        escape(text)
    );
}

/// Format a coordinate with at most two decimals
fn num(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::{GuideParams, generate_guide};

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(20.0), "20");
        assert_eq!(num(37.795_277), "37.8");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a & \"b\">"), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_dashed_border() {
        let params = GuideParams {
            size: 100.0,
            line_style: LineStyle::Dashed,
            ..Default::default()
        };
        let guide = generate_guide(GridType::Fang, &params).unwrap();
        let svg = guide_to_svg(&guide);

        assert!(svg.contains("stroke-dasharray=\"6 3\""));
        assert!(svg.contains("<rect"));
    }
}
