use crate::error;
use crate::lang::{lex, Error, Line, RowNumber};
use std::collections::BTreeMap;
use std::sync::Arc;

/// ## Row index
///
/// Every row of a loaded program keyed by its row number.

#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: Arc<BTreeMap<RowNumber, Line>>,
    max: RowNumber,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source = Arc::default();
        self.max = 0;
    }

    /// Largest row number seen, zero for an empty listing.
    pub fn max(&self) -> RowNumber {
        self.max
    }

    pub fn insert(&mut self, line: Line) -> Option<Line> {
        self.max = self.max.max(line.number());
        Arc::make_mut(&mut self.source).insert(line.number(), line)
    }

    /// The command and arguments stored under `number`.
    pub fn row(&self, number: RowNumber) -> Option<&[String]> {
        self.source.get(&number).map(|line| line.tokens())
    }

    /// Used for loading a whole program. Any existing rows are discarded.
    /// Only newline-terminated lines are rows; text after the last
    /// newline is ignored.
    pub fn load_str(&mut self, source: &str) -> Result<(), Error> {
        self.clear();
        let mut listing = Listing::default();
        let mut lines = lex(source);
        lines.pop();
        for (index, tokens) in lines.into_iter().enumerate() {
            let label = match tokens.first() {
                Some(label) => label.clone(),
                None => continue,
            };
            let line = Line::from_tokens(tokens).map_err(|_| {
                error!(MalformedRow; &format!("{} IN LINE {} OF THE SOURCE", label, index + 1))
            })?;
            listing.insert(line);
        }
        *self = listing;
        Ok(())
    }
}
