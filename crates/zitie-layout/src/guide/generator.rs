//! Guide generation
//!
//! Maps a grid style and its stroke parameters to the primitives drawn in
//! one cell. Every style except heng and si starts from the bordered square.

use crate::constants::*;
use crate::types::{GridType, Result, ensure_positive};

use super::{GuideDescriptor, GuideElement, GuideParams, GuideRole, Point, Stroke};

// =============================================================================
// Entry Points
// =============================================================================

/// Generate the guide for one cell.
///
/// Fails with `InvalidDimension` when `params.size` is not a positive,
/// finite number. Colors and widths are passed through unchanged.
pub fn generate_guide(grid_type: GridType, params: &GuideParams) -> Result<GuideDescriptor> {
    let size = ensure_positive("grid_size", params.size)?;
    let mut builder = GuideBuilder::new(size, params);

    match grid_type {
        GridType::Tian => {
            builder.border();
            builder.center_cross_if_enabled();
        }
        GridType::Mi => {
            builder.border();
            builder.center_cross_if_enabled();
            builder.diagonals_if_enabled();
        }
        GridType::Hui => {
            builder.border();
            builder.inner_frame();
            builder.center_cross_if_enabled();
        }
        GridType::Jiu => {
            builder.border();
            builder.thirds();
        }
        GridType::Gou => {
            builder.border();
            builder.corner_ticks();
        }
        GridType::Fang => {
            builder.border();
        }
        GridType::Heng => {
            builder.baseline();
        }
        GridType::Zhong => {
            builder.baseline();
            builder.midline();
        }
        GridType::Mitian => {
            builder.border();
            builder.center_cross_if_enabled();
            builder.diagonals_if_enabled();
            builder.inscribed_circle();
        }
        GridType::Si => {
            builder.rules();
        }
    }

    Ok(builder.finish())
}

/// Generate the guide for a style given by name; unknown names draw tian
pub fn generate_guide_by_name(name: &str, params: &GuideParams) -> Result<GuideDescriptor> {
    generate_guide(GridType::from_name(name), params)
}

// =============================================================================
// Builder
// =============================================================================

struct GuideBuilder {
    size: f32,
    border: Stroke,
    guide: Stroke,
    show_sublines: bool,
    elements: Vec<GuideElement>,
}

impl GuideBuilder {
    fn new(size: f32, params: &GuideParams) -> Self {
        Self {
            size,
            border: params.border_stroke(),
            guide: params.guide_stroke(),
            show_sublines: params.show_sublines,
            elements: Vec::new(),
        }
    }

    fn finish(self) -> GuideDescriptor {
        GuideDescriptor {
            size: self.size,
            elements: self.elements,
        }
    }

    fn at(&self, fraction: f32) -> f32 {
        self.size * fraction
    }

    fn border(&mut self) {
        self.elements.push(GuideElement::rect(
            GuideRole::Border,
            Point::new(0.0, 0.0),
            self.size,
            self.size,
            self.border.clone(),
        ));
    }

    fn center_cross_if_enabled(&mut self) {
        if !self.show_sublines {
            return;
        }
        let half = self.at(0.5);
        self.horizontal(GuideRole::CenterLine, half, self.guide.clone());
        self.vertical(GuideRole::CenterLine, half, self.guide.clone());
    }

    fn diagonals_if_enabled(&mut self) {
        if !self.show_sublines {
            return;
        }
        let s = self.size;
        self.elements.push(GuideElement::line(
            GuideRole::Diagonal,
            Point::new(0.0, 0.0),
            Point::new(s, s),
            self.guide.clone(),
        ));
        self.elements.push(GuideElement::line(
            GuideRole::Diagonal,
            Point::new(s, 0.0),
            Point::new(0.0, s),
            self.guide.clone(),
        ));
    }

    fn inner_frame(&mut self) {
        let inset = self.at(HUI_INSET_RATIO);
        let side = self.size - 2.0 * inset;
        self.elements.push(GuideElement::rect(
            GuideRole::InnerFrame,
            Point::new(inset, inset),
            side,
            side,
            self.border.clone(),
        ));
    }

    fn thirds(&mut self) {
        for fraction in [1.0 / 3.0, 2.0 / 3.0] {
            let pos = self.at(fraction);
            self.vertical(GuideRole::ThirdLine, pos, self.guide.clone());
        }
        for fraction in [1.0 / 3.0, 2.0 / 3.0] {
            let pos = self.at(fraction);
            self.horizontal(GuideRole::ThirdLine, pos, self.guide.clone());
        }
    }

    fn corner_ticks(&mut self) {
        let tick = self.at(GOU_TICK_RATIO);
        // Top tick hangs down from the top edge, left tick runs in from the left edge
        self.elements.push(GuideElement::line(
            GuideRole::Tick,
            Point::new(tick, 0.0),
            Point::new(tick, tick),
            self.guide.clone(),
        ));
        self.elements.push(GuideElement::line(
            GuideRole::Tick,
            Point::new(0.0, tick),
            Point::new(tick, tick),
            self.guide.clone(),
        ));
    }

    fn baseline(&mut self) {
        self.horizontal(GuideRole::Border, self.size, self.border.clone());
    }

    fn midline(&mut self) {
        let stroke = Stroke::new(
            self.guide.color.clone(),
            self.border.width * ZHONG_MIDLINE_FACTOR,
            self.border.line_style,
        );
        self.horizontal(GuideRole::CenterLine, self.at(0.5), stroke);
    }

    fn inscribed_circle(&mut self) {
        let half = self.at(0.5);
        self.elements.push(GuideElement::circle(
            Point::new(half, half),
            self.at(MITIAN_CIRCLE_RATIO),
            self.guide.clone(),
        ));
    }

    fn rules(&mut self) {
        for (i, fraction) in SI_RULE_POSITIONS.into_iter().enumerate() {
            let stroke = if i == 1 {
                self.guide.scaled(SI_MIDDLE_RULE_FACTOR)
            } else {
                self.guide.clone()
            };
            self.horizontal(GuideRole::Rule, self.at(fraction), stroke);
        }
    }

    fn horizontal(&mut self, role: GuideRole, y: f32, stroke: Stroke) {
        self.elements.push(GuideElement::line(
            role,
            Point::new(0.0, y),
            Point::new(self.size, y),
            stroke,
        ));
    }

    fn vertical(&mut self, role: GuideRole, x: f32, stroke: Stroke) {
        self.elements.push(GuideElement::line(
            role,
            Point::new(x, 0.0),
            Point::new(x, self.size),
            stroke,
        ));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::GuideShape;
    use crate::types::SheetError;

    fn params() -> GuideParams {
        GuideParams {
            size: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_tian_cross() {
        let guide = generate_guide(GridType::Tian, &params()).unwrap();

        assert_eq!(guide.elements.len(), 3);
        assert_eq!(guide.with_role(GuideRole::Border).count(), 1);
        assert_eq!(guide.with_role(GuideRole::CenterLine).count(), 2);
    }

    #[test]
    fn test_tian_without_sublines_is_border_only() {
        let mut p = params();
        p.show_sublines = false;
        let guide = generate_guide(GridType::Tian, &p).unwrap();

        assert_eq!(guide.elements.len(), 1);
        assert_eq!(guide.elements[0].role, GuideRole::Border);
    }

    #[test]
    fn test_hui_inner_frame() {
        let guide = generate_guide(GridType::Hui, &params()).unwrap();
        let frame = guide.with_role(GuideRole::InnerFrame).next().unwrap();

        assert_eq!(
            frame.shape,
            GuideShape::Rect {
                origin: Point::new(20.0, 20.0),
                width: 60.0,
                height: 60.0,
            }
        );
    }

    #[test]
    fn test_gou_ticks_quarter_length() {
        let guide = generate_guide(GridType::Gou, &params()).unwrap();
        let ticks: Vec<_> = guide.with_role(GuideRole::Tick).collect();

        assert_eq!(ticks.len(), 2);
        assert_eq!(
            ticks[0].shape,
            GuideShape::Line {
                from: Point::new(25.0, 0.0),
                to: Point::new(25.0, 25.0),
            }
        );
        assert_eq!(
            ticks[1].shape,
            GuideShape::Line {
                from: Point::new(0.0, 25.0),
                to: Point::new(25.0, 25.0),
            }
        );
    }

    #[test]
    fn test_zhong_midline_half_border_weight() {
        let mut p = params();
        p.border_width = 2.0;
        let guide = generate_guide(GridType::Zhong, &p).unwrap();
        let mid = guide.with_role(GuideRole::CenterLine).next().unwrap();

        assert_eq!(mid.stroke.width, 1.0);
        assert_eq!(guide.elements.len(), 2);
    }

    #[test]
    fn test_si_middle_rule_wider() {
        let mut p = params();
        p.guide_width = 2.0;
        let guide = generate_guide(GridType::Si, &p).unwrap();
        let widths: Vec<f32> = guide.elements.iter().map(|e| e.stroke.width).collect();

        assert_eq!(widths, vec![2.0, 3.0, 2.0]);
        assert!(!guide.has_role(GuideRole::Border));
    }

    #[test]
    fn test_non_positive_size_rejected() {
        let mut p = params();
        p.size = 0.0;
        assert!(matches!(
            generate_guide(GridType::Fang, &p),
            Err(SheetError::InvalidDimension { .. })
        ));

        p.size = f32::NAN;
        assert!(generate_guide(GridType::Fang, &p).is_err());
    }
}
