// Items from line-oriented input. The payload is each line's zero-based
// position in the input, so the host can report which line was picked.

use std::io::BufRead;

use anyhow::Result;
use clap::ValueEnum;

use crate::model::item::Item;

/// What to print for a confirmed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputField {
    Value,
    Display,
    Index,
}

impl OutputField {
    pub fn format(self, item: &Item<usize>) -> String {
        match self {
            OutputField::Value => item.value().to_string(),
            OutputField::Display => item.display().to_string(),
            OutputField::Index => item.payload().to_string(),
        }
    }
}

/// One item per non-blank line. With a delimiter, `display<delim>value`;
/// lines without it use the whole line for both.
pub fn read_items(reader: impl BufRead, delimiter: Option<char>) -> Result<Vec<Item<usize>>> {
    let mut items = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        items.push(parse_line(line, delimiter, index));
    }
    Ok(items)
}

fn parse_line(line: &str, delimiter: Option<char>, index: usize) -> Item<usize> {
    match delimiter.and_then(|d| line.split_once(d)) {
        Some((display, value)) => Item::new(display, value, index),
        None => Item::new(line, line, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn one_item_per_line_skipping_blanks() {
        let items = read_items(Cursor::new("main\n\n  \nfeature/x\r\nfix\n"), None).unwrap();
        let rows: Vec<(&str, &str, usize)> =
            items.iter().map(|i| (i.display(), i.value(), *i.payload())).collect();
        assert_eq!(rows, [("main", "main", 0), ("feature/x", "feature/x", 3), ("fix", "fix", 4)]);
    }

    #[test]
    fn delimiter_splits_display_and_value() {
        let input = "Production\tprod\nStaging\tstage\ttwo\nlocal\n";
        let items = read_items(Cursor::new(input), Some('\t')).unwrap();
        assert_eq!(items[0], Item::new("Production", "prod", 0));
        assert_eq!(items[1], Item::new("Staging", "stage\ttwo", 1));
        assert_eq!(items[2], Item::new("local", "local", 2));
    }

    #[test]
    fn empty_input_gives_no_items() {
        assert!(read_items(Cursor::new(""), None).unwrap().is_empty());
    }

    #[test]
    fn output_fields() {
        let item = Item::new("Staging", "stage", 7);
        assert_eq!(OutputField::Value.format(&item), "stage");
        assert_eq!(OutputField::Display.format(&item), "Staging");
        assert_eq!(OutputField::Index.format(&item), "7");
    }
}
