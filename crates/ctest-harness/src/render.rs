/// Width used when the terminal width is unknown
pub const DEFAULT_COLUMNS: usize = 80;

/// Draws full-width separator lines
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ruler {
    width: usize,
}

impl Ruler {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Width of the terminal on stdout, else `COLUMNS`, else [`DEFAULT_COLUMNS`]
    pub fn from_env() -> Self {
        let tty = terminal_size::terminal_size_of(std::io::stdout())
            .map(|(terminal_size::Width(width), _)| usize::from(width));
        let columns = std::env::var("COLUMNS").ok();
        Self::new(resolve_width(tty, columns.as_deref()))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn separator(
        &self,
        writer: &mut dyn std::io::Write,
        fill: char,
    ) -> std::io::Result<()> {
        let line = fill.to_string().repeat(self.width);
        writeln!(writer, "{line}")
    }

    /// Writes `title` centred between runs of `fill`
    ///
    /// A title too wide for the line is written on its own.
    pub fn banner(
        &self,
        writer: &mut dyn std::io::Write,
        fill: char,
        title: &str,
        style: anstyle::Style,
    ) -> std::io::Result<()> {
        let len = title.chars().count();
        write!(writer, "{}", style.render())?;
        if self.width < len + 2 {
            write!(writer, "{title}")?;
        } else {
            let pad = fill.to_string().repeat((self.width - len - 2) / 2);
            let odd = if (self.width - len) % 2 == 1 {
                fill.to_string()
            } else {
                String::new()
            };
            write!(writer, "{pad} {title} {pad}{odd}")?;
        }
        writeln!(writer, "{}", style.render_reset())
    }
}

fn resolve_width(tty: Option<usize>, columns: Option<&str>) -> usize {
    tty.filter(|&width| width != 0)
        .or_else(|| {
            columns
                .and_then(|columns| columns.trim().parse::<usize>().ok())
                .filter(|&width| width != 0)
        })
        .unwrap_or(DEFAULT_COLUMNS)
}

impl Default for Ruler {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS)
    }
}
