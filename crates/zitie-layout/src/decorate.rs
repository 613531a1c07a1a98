//! Cell decoration
//!
//! Pairs every practice cell of a page with what a renderer needs to draw it:
//! the cell guide, the glyph style and an optional pinyin label.

use crate::annotation::{AnnotationCache, AnnotationProvider, pinyin_for};
use crate::guide::{GuideDescriptor, generate_guide};
use crate::options::LayoutSettings;
use crate::style::GlyphStyle;
use crate::types::*;

/// A pinyin label placed above a cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinyinLabel {
    pub text: String,
    pub style: GlyphStyle,
}

/// One practice cell ready for rendering
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoratedCell {
    pub cell: PracticeCell,
    /// Glyph to draw; `None` leaves the cell empty for practice
    pub glyph: Option<GlyphStyle>,
    pub pinyin: Option<PinyinLabel>,
}

impl DecoratedCell {
    /// Whether this cell shows the faded reference glyph
    pub fn is_reference(&self) -> bool {
        !self.cell.is_first_in_group && self.glyph.is_some()
    }
}

/// A page of decorated cells sharing one guide
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecoratedPage {
    pub guide: GuideDescriptor,
    pub cells: Vec<DecoratedCell>,
}

/// Decorate every cell of `page`.
///
/// # Arguments
/// * `page` - Cells of one page, in pagination order
/// * `settings` - Layout settings the page was paginated with
/// * `annotations` - Caller-owned annotation cache
pub fn decorate_page<P: AnnotationProvider>(
    page: &Page,
    settings: &LayoutSettings,
    annotations: &mut AnnotationCache<P>,
) -> Result<DecoratedPage> {
    let guide = generate_guide(settings.grid_type, &settings.guide_params())?;

    let glyph = settings.glyph_style();
    let reference = settings.show_reference.then(|| settings.reference_style());
    let pinyin_style = settings.show_pinyin.then(|| settings.pinyin_style());

    let cells = page
        .iter()
        .map(|cell| {
            let glyph = if cell.is_first_in_group {
                Some(glyph.clone())
            } else {
                reference.clone()
            };

            let pinyin = match &pinyin_style {
                Some(style) if cell.is_first_in_group => {
                    let text = pinyin_for(annotations, &cell.character, settings.with_tone);
                    (!text.is_empty()).then(|| PinyinLabel {
                        text,
                        style: style.clone(),
                    })
                }
                _ => None,
            };

            DecoratedCell {
                cell: cell.clone(),
                glyph,
                pinyin,
            }
        })
        .collect();

    Ok(DecoratedPage { guide, cells })
}
