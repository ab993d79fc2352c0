use std::io;

/// A `Renderer` draws the outcome of a verification.
///
/// The `Verifier` calls `draw_point` once per trial, then `draw_linear_function` once and
/// finally `save` once.
pub trait Renderer {
    /// Draws a point, colored by the side of the line the perceptron put it on.
    fn draw_point(&mut self, x: i32, y: i32, above: bool);

    /// Draws the line `y = a*x + b`.
    fn draw_linear_function(&mut self, a: i32, b: i32);

    /// Persists everything drawn so far.
    fn save(&mut self) -> io::Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_point(&mut self, x: i32, y: i32, above: bool) {
        (**self).draw_point(x, y, above)
    }

    fn draw_linear_function(&mut self, a: i32, b: i32) {
        (**self).draw_linear_function(a, b)
    }

    fn save(&mut self) -> io::Result<()> {
        (**self).save()
    }
}

/// A call received by a `Recorder`.
#[cfg(test)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Drawn {
    Point { x: i32, y: i32, above: bool },
    Line { a: i32, b: i32 },
    Save,
}

/// A `Renderer` that remembers every call it gets, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) calls: Vec<Drawn>,
    pub(crate) fail_save: bool,
}

#[cfg(test)]
impl Renderer for Recorder {
    fn draw_point(&mut self, x: i32, y: i32, above: bool) {
        self.calls.push(Drawn::Point { x, y, above });
    }

    fn draw_linear_function(&mut self, a: i32, b: i32) {
        self.calls.push(Drawn::Line { a, b });
    }

    fn save(&mut self) -> io::Result<()> {
        self.calls.push(Drawn::Save);

        if self.fail_save {
            return Err(io::Error::other("disk full"));
        }

        Ok(())
    }
}
