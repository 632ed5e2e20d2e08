// Example: schema, data, column intents, and reading a frame.
use chrono::NaiveDate;
use gridstate::{
    CellValue, ColumnSpec, Columns, ContentType, FilterValue, Grid, GridOptions, PinSide, Record,
    SortDirection,
};

fn main() -> Result<(), gridstate::GridError> {
    let columns = Columns::new(vec![
        ColumnSpec::new("name", "Name", ContentType::Text),
        ColumnSpec::new("age", "Age", ContentType::Number).with_width(90),
        ColumnSpec::new("country", "Country", ContentType::Country),
        ColumnSpec::new("joined", "Joined", ContentType::Date),
    ])?;

    let mut grid = Grid::new(columns, GridOptions::new())?;

    let countries = ["US", "DE", "CA", "JP", "EE", "CH", "BR", "FR"];
    let mut rows = Vec::new();
    for i in 0..10_000u32 {
        rows.push(Record::new(vec![
            CellValue::Text(format!("person-{i}")),
            CellValue::Number((18 + i % 60) as f64),
            CellValue::Country(countries[(i as usize) % countries.len()].to_string()),
            CellValue::Date(
                NaiveDate::from_ymd_opt(2020 + (i % 5) as i32, 1 + i % 12, 1 + i % 28)
                    .unwrap_or_default(),
            ),
        ]));
    }
    grid.set_records(rows)?;

    grid.set_viewport_height(600);
    grid.apply_scroll_event(123_456);
    println!("total_size={}", grid.total_size());
    println!("frame={:?}", grid.frame());

    grid.set_sort("country", SortDirection::Ascending)?;
    grid.set_filter("age", FilterValue::Number(70.0))?;
    println!("filtered frame={:?}", grid.frame());
    grid.for_each_visible_row(|row| {
        println!("  view[{}] -> record {}", row.position, row.index);
    });

    grid.toggle_pin("name", PinSide::Left)?;
    grid.toggle_pin("age", PinSide::Left)?;
    for cell in 0..4 {
        println!("pin[{cell}]={:?}", grid.pin_geometry(cell));
    }
    Ok(())
}
