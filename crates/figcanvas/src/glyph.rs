/// One character's rows as parsed from the font definition.
///
/// Rows are padded to a uniform width; hardblank characters are kept
/// verbatim so the compositor can tell them apart from real spaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: Vec<String>,
    width: usize,
}

impl Glyph {
    pub(crate) fn new(rows: Vec<String>) -> Self {
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                let len = row.chars().count();
                row.extend(std::iter::repeat(' ').take(width - len));
                row
            })
            .collect();
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&str> {
        self.rows.get(index).map(String::as_str)
    }

    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(String::as_str)
    }
}
