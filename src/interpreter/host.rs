/// Receives the lines produced by the `print` builtin.
///
/// The interpreter never talks to stdout directly; everything `print`
/// emits goes through a sink supplied by the embedder. The CLI passes a
/// [`StdoutSink`], tests and the library API pass a [`CaptureSink`].
pub trait OutputSink {
    /// Called once per `print` invocation with the fully formatted line
    /// (without a trailing newline).
    fn write_line(&mut self, line: &str);
}

/// Writes each line to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory, in emission order.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Vec<String>,
}

impl CaptureSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines captured so far.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the sink and returns the captured lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl OutputSink for CaptureSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
