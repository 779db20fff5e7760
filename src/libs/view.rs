use super::category::Category;
use super::formatter::format_hours;
use super::parser::{DayRecord, ParseError};
use prettytable::{Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints the dated table: one row per day, hours per category, total and mark.
    pub fn days(days: &[DayRecord]) {
        let mut header = vec![Cell::new("DATE")];
        header.extend(Category::ALL.iter().map(|category| Cell::new(category.label())));
        header.push(Cell::new("TOTAL"));
        header.push(Cell::new(""));

        let mut table = Table::new();
        table.add_row(Row::new(header));
        for day in days {
            let mut cells = vec![Cell::new(&day.date)];
            cells.extend(day.formatted_hours().iter().map(|hours| Cell::new(hours)));
            cells.push(Cell::new(&format_hours(day.total())));
            cells.push(Cell::new(day.mark()));
            table.add_row(Row::new(cells));
        }
        table.printstd();
    }

    pub fn errors(errors: &[ParseError]) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("DATE"), Cell::new("LINE")]));
        for error in errors {
            table.add_row(Row::new(vec![Cell::new(&error.date), Cell::new(&error.line)]));
        }
        table.printstd();
    }
}
