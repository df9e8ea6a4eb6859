//! List command handler
//!
//! Fetches every page of a listing, loads it into a `RepoTable` and prints
//! the table.

use anyhow::{Context, Result, anyhow};
use clap::Args;
use colored::*;
use repodeck_client::GithubClient;
use repodeck_core::domain::repository::OwnerScope;
use repodeck_core::table::RepoTable;

/// Columns printed without `--wide`: name, private, size, owner, last pushed, description
const COMPACT_COLUMNS: [usize; 6] = [0, 1, 2, 3, 7, 8];

/// Arguments for listing repositories
#[derive(Args, Debug)]
pub struct ListArgs {
    /// List repositories of this organization instead of your account
    #[arg(long)]
    pub org: Option<String>,

    /// Sort by column, given as label (e.g. "size") or index
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Show every column
    #[arg(short, long)]
    pub wide: bool,
}

/// List repositories as a table
pub fn list_repositories(client: &GithubClient, args: ListArgs) -> Result<()> {
    let scope = OwnerScope::from_org(args.org);
    let repos = client
        .list_all(&scope)
        .context("Failed to list repositories")?;

    let mut table = RepoTable::from_raw(repos);
    if let Some(column) = &args.sort {
        let column = resolve_column(&table, column)?;
        table.sort(column, args.desc)?;
    }

    if table.is_empty() {
        println!("{}", "No repositories found.".yellow());
        return Ok(());
    }

    let columns: Vec<usize> = if args.wide {
        (0..table.column_count()).collect()
    } else {
        COMPACT_COLUMNS.to_vec()
    };

    for line in render(&table, &columns)? {
        println!("{}", line);
    }
    println!();
    println!("{}", format!("{} repositories", table.row_count()).dimmed());

    Ok(())
}

/// Accept a column index or a label, ignoring case
fn resolve_column(table: &RepoTable, column: &str) -> Result<usize> {
    if let Ok(index) = column.parse::<usize>() {
        table.column_label(index)?;
        return Ok(index);
    }
    table
        .column_index(column)
        .ok_or_else(|| anyhow!("unknown column '{}'", column))
}

/// Lay out the selected columns with padded cells; the header comes first
fn render(table: &RepoTable, columns: &[usize]) -> Result<Vec<String>> {
    let mut grid = Vec::with_capacity(table.row_count());
    for row in 0..table.row_count() {
        let cells = columns
            .iter()
            .map(|&column| table.cell(row, column).map(|cell| cell.to_string()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        grid.push(cells);
    }

    let labels = columns
        .iter()
        .map(|&column| table.column_label(column))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let widths: Vec<usize> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            grid.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header = labels
        .iter()
        .zip(&widths)
        .map(|(label, &width)| format!("{:<width$}", label, width = width))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![header.trim_end().bold().to_string()];
    for cells in grid {
        let line = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use repodeck_core::domain::repository::RepositoryRecord;

    fn table() -> RepoTable {
        let record = |name: &str, size_kb| RepositoryRecord {
            name: name.to_string(),
            is_private: true,
            size_kb,
            owner_login: "nklkli".to_string(),
            html_url: format!("https://github.com/nklkli/{}", name),
            clone_url: format!("https://github.com/nklkli/{}.git", name),
            created_at: "2024-05-02T12:18:52Z".parse().unwrap(),
            pushed_at: None,
            description: Some("demo".to_string()),
        };
        RepoTable::new(vec![record("webedifact", 8), record("django_tutorial", 24)])
    }

    #[test]
    fn test_resolve_column_by_label_or_index() {
        let table = table();
        assert_eq!(resolve_column(&table, "size").unwrap(), 2);
        assert_eq!(resolve_column(&table, "Owner").unwrap(), 3);
        assert_eq!(resolve_column(&table, "0").unwrap(), 0);
        assert!(resolve_column(&table, "9").is_err());
        assert!(resolve_column(&table, "stars").is_err());
    }

    #[test]
    fn test_render_pads_columns() {
        colored::control::set_override(false);
        let lines = render(&table(), &[0, 2]).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Name             Size");
        assert_eq!(lines[1], "webedifact       8");
        assert_eq!(lines[2], "django_tutorial  24");
    }
}
