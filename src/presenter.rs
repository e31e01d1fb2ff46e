use comfy_table::{presets::ASCII_FULL, Attribute, Cell, Color, Table};

use crate::{declare::Quote, util::datetime::DATE_TIME_LAYOUT};

const HEADER: [&str; 8] = [
    "Number",
    "Current Price",
    "Percentage Change",
    "Opening Price",
    "Previous Closing Price",
    "High Price",
    "Low Price",
    "Date",
];

/// 資料列一律白底黑字
const ROW_FG: Color = Color::Black;
const ROW_BG: Color = Color::White;

/// 表頭底色，下跌為綠色、其餘為洋紅色
fn header_color(quote: &Quote) -> Color {
    if quote.is_falling() {
        Color::Green
    } else {
        Color::Magenta
    }
}

/// 將報價組成單列表格
pub fn build_table(quote: &Quote) -> Table {
    let theme = header_color(quote);

    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADER.iter().map(|h| {
        Cell::new(h)
            .fg(Color::Black)
            .bg(theme)
            .add_attribute(Attribute::Bold)
    }));

    let row = [
        quote.number.clone(),
        quote.current_price.clone(),
        quote.percentage_change.clone(),
        quote.opening_price.clone(),
        quote.previous_closing_price.clone(),
        quote.high_price.clone(),
        quote.low_price.clone(),
        quote.date.format(DATE_TIME_LAYOUT).to_string(),
    ];
    table.add_row(row.into_iter().map(|v| Cell::new(v).fg(ROW_FG).bg(ROW_BG)));

    table
}

/// 印出報價表格
pub fn print(quote: &Quote) {
    println!("{}", build_table(quote));
}
