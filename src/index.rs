//! Index document generation.
//!
//! Renders the top-level `PITCHME.md` that links to every presentation. GitPitch
//! opens a sub-presentation with `?p=<directory>`, so each link's display text
//! and target are both the canonical name: `[intro-to-rust](?p=intro-to-rust)`.
//!
//! ## Table Layout
//!
//! A single long list of links scrolls off the slide, so links are arranged in
//! a Markdown table. One column holds up to `column_size` links (10 by
//! default); past that, columns are added up to `max_columns` (3 by default).
//!
//! ```text
//! |   |   |
//! |---|---|
//! | [a](?p=a) | [e](?p=e) |
//! | [b](?p=b) | [f](?p=f) |
//! | [c](?p=c) | [g](?p=g) |
//! | [d](?p=d) | [](?p=) |
//! ```
//!
//! Names fill the first column top to bottom before moving on, so any
//! shortfall shows up as empty cells at the bottom of the last column.
//!
//! ## List Layout
//!
//! The legacy layout: one link per paragraph in name order.

use crate::config::{IndexConfig, Layout};
use crate::scan::PresentationMapping;

/// File name of the index document (and of every presentation body).
pub const INDEX_FILE: &str = "PITCHME.md";

/// Grid of link cells, `rows[row][column]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTable {
    pub columns: usize,
    pub rows: Vec<Vec<String>>,
}

/// Number of table columns for `n` items.
pub fn column_count(n: usize, config: &IndexConfig) -> usize {
    n.div_ceil(config.column_size.max(1))
        .min(config.max_columns)
        .max(1)
}

/// Number of rows each column holds for `n` items spread over `columns`.
///
/// Rounds half away from zero. When rounding down would leave items without
/// a slot the count widens to fit them all, and there is always one row.
pub fn rows_per_column(n: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    let rounded = (n as f64 / columns as f64).round() as usize;
    rounded.max(n.div_ceil(columns)).max(1)
}

/// Markdown link to a presentation. An empty name renders the empty slot.
pub fn link(name: &str) -> String {
    format!("[{name}](?p={name})")
}

/// Lay out sorted names column-major.
pub fn build_table(names: &[&str], config: &IndexConfig) -> IndexTable {
    let columns = column_count(names.len(), config);
    let rows_per_column = rows_per_column(names.len(), columns);

    let mut rows = vec![Vec::with_capacity(columns); rows_per_column];
    for column in 0..columns {
        for (row, cells) in rows.iter_mut().enumerate() {
            let name = names
                .get(column * rows_per_column + row)
                .copied()
                .unwrap_or("");
            cells.push(link(name));
        }
    }

    IndexTable { columns, rows }
}

/// Render the table as Markdown.
pub fn render_table(table: &IndexTable) -> String {
    let mut body = String::new();
    body.push_str(&format!("|{}|\n", vec!["   "; table.columns].join("|")));
    body.push_str(&format!("|{}|\n", vec!["---"; table.columns].join("|")));
    for row in &table.rows {
        body.push_str(&format!("| {} |\n", row.join(" | ")));
    }
    body.push('\n');
    body
}

/// Render sorted names as one link paragraph each.
pub fn render_list(names: &[&str]) -> String {
    names.iter().map(|name| format!("{}\n\n", link(name))).collect()
}

/// Render the full index document for a mapping.
pub fn generate_index(mapping: &PresentationMapping, config: &IndexConfig) -> String {
    let names: Vec<&str> = mapping.names().collect();
    match config.layout {
        Layout::Table => render_table(&build_table(&names, config)),
        Layout::List => render_list(&names),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::mapping_of;

    fn defaults() -> IndexConfig {
        IndexConfig::default()
    }

    const LETTERS: [&str; 7] = ["a", "b", "c", "d", "e", "f", "g"];

    #[test]
    fn column_count_grows_per_ten_items() {
        let config = defaults();
        assert_eq!(column_count(5, &config), 1);
        assert_eq!(column_count(10, &config), 1);
        assert_eq!(column_count(11, &config), 2);
        assert_eq!(column_count(20, &config), 2);
        assert_eq!(column_count(21, &config), 3);
        assert_eq!(column_count(100, &config), 3);
    }

    #[test]
    fn column_count_is_never_zero() {
        assert_eq!(column_count(0, &defaults()), 1);
    }

    #[test]
    fn column_count_honours_config() {
        let config = IndexConfig {
            max_columns: 5,
            column_size: 4,
            ..defaults()
        };
        assert_eq!(column_count(4, &config), 1);
        assert_eq!(column_count(9, &config), 3);
        assert_eq!(column_count(40, &config), 5);
    }

    #[test]
    fn rows_round_half_away_from_zero() {
        assert_eq!(rows_per_column(7, 2), 4);
        assert_eq!(rows_per_column(15, 2), 8);
        assert_eq!(rows_per_column(30, 3), 10);
    }

    #[test]
    fn rows_widen_instead_of_dropping_items() {
        // 25 / 3 rounds to 8, which leaves no slot for the 25th item
        assert_eq!(rows_per_column(25, 3), 9);
        assert_eq!(rows_per_column(100, 3), 34);
    }

    #[test]
    fn rows_never_zero() {
        assert_eq!(rows_per_column(0, 1), 1);
    }

    #[test]
    fn seven_items_in_two_columns_fill_column_major() {
        let config = IndexConfig {
            column_size: 4,
            ..defaults()
        };
        let table = build_table(&LETTERS, &config);

        assert_eq!(table.columns, 2);
        assert_eq!(table.rows.len(), 4);
        let first: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
        let second: Vec<&str> = table.rows.iter().map(|r| r[1].as_str()).collect();
        assert_eq!(first, vec!["[a](?p=a)", "[b](?p=b)", "[c](?p=c)", "[d](?p=d)"]);
        assert_eq!(second, vec!["[e](?p=e)", "[f](?p=f)", "[g](?p=g)", "[](?p=)"]);
    }

    #[test]
    fn every_row_has_one_cell_per_column() {
        let mapping = mapping_of(23);
        let names: Vec<&str> = mapping.names().collect();
        let table = build_table(&names, &defaults());

        assert_eq!(table.columns, 3);
        assert_eq!(table.rows.len(), 8);
        assert!(table.rows.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn empty_cells_only_trail_the_last_column() {
        let mapping = mapping_of(23);
        let names: Vec<&str> = mapping.names().collect();
        let table = build_table(&names, &defaults());

        let empty = link("");
        for row in &table.rows {
            assert_ne!(row[0], empty);
            assert_ne!(row[1], empty);
        }
        let last: Vec<bool> = table.rows.iter().map(|r| r[2] == empty).collect();
        assert_eq!(last, vec![false, false, false, false, false, false, false, true]);
    }

    #[test]
    fn no_item_is_dropped_when_rows_round_down() {
        let mapping = mapping_of(25);
        let rendered = generate_index(&mapping, &defaults());
        for name in mapping.names() {
            assert!(rendered.contains(&link(name)), "{name} missing from index");
        }
    }

    #[test]
    fn renders_exact_table_markdown() {
        let table = build_table(&["a", "b"], &defaults());
        assert_eq!(
            render_table(&table),
            "|   |\n|---|\n| [a](?p=a) |\n| [b](?p=b) |\n\n"
        );
    }

    #[test]
    fn renders_multi_column_header() {
        let config = IndexConfig {
            column_size: 1,
            ..defaults()
        };
        let rendered = render_table(&build_table(&["a", "b", "c"], &config));
        assert_eq!(
            rendered,
            "|   |   |   |\n|---|---|---|\n| [a](?p=a) | [b](?p=b) | [c](?p=c) |\n\n"
        );
    }

    #[test]
    fn empty_mapping_renders_one_empty_cell() {
        let rendered = generate_index(&mapping_of(0), &defaults());
        assert_eq!(rendered, "|   |\n|---|\n| [](?p=) |\n\n");
    }

    #[test]
    fn list_layout_is_one_paragraph_per_link() {
        let config = IndexConfig {
            layout: Layout::List,
            ..defaults()
        };
        let rendered = generate_index(&mapping_of(2), &config);
        assert_eq!(rendered, "[talk-00](?p=talk-00)\n\n[talk-01](?p=talk-01)\n\n");
    }

    #[test]
    fn list_layout_of_nothing_is_empty() {
        assert_eq!(render_list(&[]), "");
    }

    #[test]
    fn index_uses_sorted_names() {
        let mut mapping = mapping_of(0);
        for name in ["zeta", "alpha", "mid"] {
            mapping.insert(
                name.into(),
                crate::scan::SourceItem {
                    raw_name: name.into(),
                    body_path: format!("{name}.md").into(),
                    metadata_path: None,
                },
            );
        }
        let rendered = generate_index(&mapping, &defaults());
        assert_eq!(
            rendered,
            "|   |\n|---|\n| [alpha](?p=alpha) |\n| [mid](?p=mid) |\n| [zeta](?p=zeta) |\n\n"
        );
    }
}
