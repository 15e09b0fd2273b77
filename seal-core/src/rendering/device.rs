//! Device trait for rendering backend abstraction.
//!
//! Seal composers issue complete paths plus paint and stroke settings; the
//! device owns the canvas and the transform stack. [`RecordingDevice`] keeps a
//! log of operations instead of pixels, for tests.

use super::graphics_state::{Color, FillRule, GraphicsState, StrokeProps};
use super::path::Path;
use crate::core::SealResult;

/// How to draw a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathDrawMode {
    /// Fill the path
    Fill(FillRule),
    /// Stroke the path outline
    Stroke,
}

/// Paint for drawing operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid color
    Solid(Color),
}

impl Paint {
    pub fn black() -> Self {
        Paint::Solid(Color::black())
    }

    pub fn from_color(color: Color) -> Self {
        Paint::Solid(color)
    }

    pub fn color(&self) -> Color {
        match self {
            Paint::Solid(color) => *color,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Paint::black()
    }
}

/// A surface that seal drawings are rendered onto.
pub trait Device {
    /// Replace every pixel with `color`.
    fn clear(&mut self, color: Color);

    /// Draw a path in the current transform.
    ///
    /// # Arguments
    /// * `path` - Path in user space
    /// * `mode` - How to draw the path (fill or stroke)
    /// * `paint` - The paint/color to use
    /// * `stroke_props` - Stroke properties (only used for stroking)
    fn draw_path(
        &mut self,
        path: &Path,
        mode: PathDrawMode,
        paint: &Paint,
        stroke_props: &StrokeProps,
    ) -> SealResult<()>;

    /// Save the graphics state.
    fn save_state(&mut self);

    /// Restore the graphics state.
    fn restore_state(&mut self);

    /// Concatenate a transformation matrix to the current CTM.
    fn concat_matrix(&mut self, matrix: &[f64; 6]);

    /// Canvas size as (width, height) in pixels.
    fn page_bounds(&self) -> (f64, f64);
}

/// A drawing operation captured by [`RecordingDevice`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    /// A path already mapped through the CTM
    Path {
        path: Path,
        mode: PathDrawMode,
        color: Color,
        line_width: f64,
    },
    Save,
    Restore,
    ConcatMatrix([f64; 6]),
}

impl DrawOp {
    /// Device-space bounding box of a path operation.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        match self {
            DrawOp::Path { path, .. } => path.bounding_box(),
            _ => None,
        }
    }
}

/// A device that records operations without producing pixels.
#[derive(Debug)]
pub struct RecordingDevice {
    page_width: f64,
    page_height: f64,
    state_stack: Vec<GraphicsState>,
    operations: Vec<DrawOp>,
}

impl RecordingDevice {
    /// Create a new recording device with the given canvas dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        RecordingDevice {
            page_width: width,
            page_height: height,
            state_stack: vec![GraphicsState::default()],
            operations: Vec::new(),
        }
    }

    pub fn operations(&self) -> &[DrawOp] {
        &self.operations
    }

    /// Only the path operations, in draw order.
    pub fn paths(&self) -> impl Iterator<Item = &DrawOp> {
        self.operations
            .iter()
            .filter(|op| matches!(op, DrawOp::Path { .. }))
    }

    fn state(&mut self) -> &mut GraphicsState {
        if self.state_stack.is_empty() {
            self.state_stack.push(GraphicsState::default());
        }
        let last = self.state_stack.len() - 1;
        &mut self.state_stack[last]
    }

    fn ctm(&self) -> [f64; 6] {
        self.state_stack
            .last()
            .map(|state| state.ctm)
            .unwrap_or(super::graphics_state::IDENTITY)
    }
}

impl Device for RecordingDevice {
    fn clear(&mut self, color: Color) {
        self.operations.push(DrawOp::Clear(color));
    }

    fn draw_path(
        &mut self,
        path: &Path,
        mode: PathDrawMode,
        paint: &Paint,
        stroke_props: &StrokeProps,
    ) -> SealResult<()> {
        let ctm = self.ctm();
        self.operations.push(DrawOp::Path {
            path: path.transformed(&ctm),
            mode,
            color: paint.color(),
            line_width: stroke_props.line_width,
        });
        Ok(())
    }

    fn save_state(&mut self) {
        let current = self.state().clone();
        self.state_stack.push(current);
        self.operations.push(DrawOp::Save);
    }

    fn restore_state(&mut self) {
        if self.state_stack.len() > 1 {
            self.state_stack.pop();
        }
        self.operations.push(DrawOp::Restore);
    }

    fn concat_matrix(&mut self, matrix: &[f64; 6]) {
        self.state().concat_matrix(matrix);
        self.operations.push(DrawOp::ConcatMatrix(*matrix));
    }

    fn page_bounds(&self) -> (f64, f64) {
        (self.page_width, self.page_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::graphics_state::translation;

    fn line() -> Path {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path
    }

    #[test]
    fn test_device_operations() {
        let mut device = RecordingDevice::new(500.0, 500.0);
        device.clear(Color::white());
        device
            .draw_path(&line(), PathDrawMode::Stroke, &Paint::black(), &StrokeProps::with_width(3.0))
            .unwrap();

        let ops = device.operations();
        assert_eq!(ops[0], DrawOp::Clear(Color::white()));
        match &ops[1] {
            DrawOp::Path { mode, color, line_width, .. } => {
                assert_eq!(*mode, PathDrawMode::Stroke);
                assert_eq!(*color, Color::black());
                assert_eq!(*line_width, 3.0);
            }
            other => panic!("unexpected op {:?}", other),
        }
        assert_eq!(device.page_bounds(), (500.0, 500.0));
    }

    #[test]
    fn test_paths_recorded_in_device_space() {
        let mut device = RecordingDevice::new(100.0, 100.0);
        device.save_state();
        device.concat_matrix(&translation(5.0, 7.0));
        device
            .draw_path(&line(), PathDrawMode::Stroke, &Paint::black(), &StrokeProps::default())
            .unwrap();
        device.restore_state();
        device
            .draw_path(&line(), PathDrawMode::Stroke, &Paint::black(), &StrokeProps::default())
            .unwrap();

        let bounds: Vec<_> = device.paths().filter_map(DrawOp::bounds).collect();
        assert_eq!(bounds, vec![(5.0, 7.0, 15.0, 7.0), (0.0, 0.0, 10.0, 0.0)]);
    }

    #[test]
    fn test_restore_never_pops_base_state() {
        let mut device = RecordingDevice::new(10.0, 10.0);
        device.restore_state();
        device.concat_matrix(&translation(1.0, 1.0));
        device
            .draw_path(
                &line(),
                PathDrawMode::Fill(FillRule::NonZero),
                &Paint::from_color(Color::white()),
                &StrokeProps::default(),
            )
            .unwrap();
        let last = device.paths().last().and_then(DrawOp::bounds);
        assert_eq!(last, Some((1.0, 1.0, 11.0, 1.0)));
        assert_eq!(device.operations().first(), Some(&DrawOp::Restore));
    }
}
