pub mod annotation;
pub mod constants;
mod decorate;
pub mod guide;
pub mod layout;
mod options;
pub mod paginate;
mod preview;
mod sheet;
mod stats;
pub mod style;
pub mod svg;
mod types;

pub use annotation::{
    Annotation, AnnotationCache, AnnotationProvider, AnnotationTable, NoAnnotations, pinyin_label,
};
pub use decorate::{DecoratedCell, DecoratedPage, PinyinLabel, decorate_page};
pub use guide::{GuideDescriptor, GuideParams, generate_guide, generate_guide_by_name};
pub use layout::{PageCapacity, PlacedCell, page_capacity, place_page};
pub use options::*;
pub use paginate::{paginate, paginate_sheet, paginate_with_paper, split_characters};
pub use preview::generate_preview;
pub use sheet::{Sheet, SheetPage, compose_sheet};
pub use stats::calculate_statistics;
pub use style::{GlyphStyle, character_style, overlay_style, pinyin_style};
pub use svg::{guide_to_svg, page_to_svg, save_svg_pages};
pub use types::*;
