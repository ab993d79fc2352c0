use std::{
    fmt::Display,
    io,
    ops::Range,
    path::{Path, PathBuf},
};

use log::info;
use perceptron::verification::Renderer;
use plotters::prelude::*;

/// Both axes span the range sample points are drawn from.
const AXIS: Range<i32> = -101..101;
const POINT_RADIUS: i32 = 3;

/// The size of the image when none is given.
pub const DEFAULT_SIZE: (u32, u32) = (600, 600);

/// A drawing of a verification: the classified points and the separation line, written to a
/// PNG file on `save`.
///
/// Nothing touches the file system until `save` is called.
#[derive(Debug)]
pub struct Canvas {
    path: PathBuf,
    size: (u32, u32),
    points: Vec<(i32, i32, bool)>,
    line: Option<(i32, i32)>,
}

impl Canvas {
    /// Creates a new empty `Canvas`.
    ///
    /// # Arguments
    /// * `path` - Where the image will be saved.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_size(path, DEFAULT_SIZE)
    }

    /// Creates a new empty `Canvas` of `size` pixels.
    pub fn with_size<P: Into<PathBuf>>(path: P, size: (u32, u32)) -> Self {
        Self {
            path: path.into(),
            size,
            points: Vec::new(),
            line: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The points drawn so far, with whether they were classified as above the line.
    pub fn points(&self) -> &[(i32, i32, bool)] {
        &self.points
    }

    pub fn line(&self) -> Option<(i32, i32)> {
        self.line
    }

    fn render(&self) -> io::Result<()> {
        let root = BitMapBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .build_cartesian_2d(AXIS, AXIS)
            .map_err(render_err)?;

        let (low, high) = (AXIS.start, AXIS.end - 1);
        let axes = [[(low, 0), (high, 0)], [(0, low), (0, high)]];
        for axis in axes {
            chart
                .draw_series(LineSeries::new(axis, BLACK.mix(0.3).stroke_width(1)))
                .map_err(render_err)?;
        }

        chart
            .draw_series(self.points.iter().map(|&(x, y, above)| {
                let color = if above { BLUE } else { RED };
                Circle::new((x, y), POINT_RADIUS, color.filled())
            }))
            .map_err(render_err)?;

        if let Some((a, b)) = self.line {
            let line = AXIS
                .map(|x| (x, a * x + b))
                .filter(|(_, y)| AXIS.contains(y));
            chart
                .draw_series(LineSeries::new(line, BLACK.stroke_width(2)))
                .map_err(render_err)?;
        }

        root.present().map_err(render_err)
    }
}

impl Renderer for Canvas {
    fn draw_point(&mut self, x: i32, y: i32, above: bool) {
        self.points.push((x, y, above));
    }

    fn draw_linear_function(&mut self, a: i32, b: i32) {
        self.line = Some((a, b));
    }

    fn save(&mut self) -> io::Result<()> {
        self.render()?;

        let path = self.path.display().to_string();
        info!(path = path.as_str(), points = self.points.len(); "saved drawing");
        Ok(())
    }
}

fn render_err<E: Display>(e: E) -> io::Error {
    io::Error::other(e.to_string())
}
