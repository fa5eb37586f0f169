use anuario::api::{CmdMessage, MessageLevel};
use anuario::commands::PageInfo;
use anuario::config::AnuarioConfig;
use anuario::labels::Locale;
use anuario::model::{Field, Record};
use anuario::sheet;
use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const HOUSE_WIDTH: usize = 14;
const SLUG_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_record_list(records: &[Record], page: Option<&PageInfo>, per_page: usize) {
    if records.is_empty() {
        return;
    }

    let offset = page.map(|p| p.page.saturating_sub(1)).unwrap_or(0) * per_page.max(1);
    for (i, record) in records.iter().enumerate() {
        let idx_str = format!("{:>4}. ", i + 1 + offset);
        let slug = truncate_to_width(&record.slug, SLUG_WIDTH);
        let fixed_width = idx_str.width() + SLUG_WIDTH + HOUSE_WIDTH + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let name = truncate_to_width(record.display_name(), available);
        let padding = available.saturating_sub(name.width());
        let house = truncate_to_width(record.display_house(), HOUSE_WIDTH);
        let house_padding = HOUSE_WIDTH.saturating_sub(house.width());

        println!(
            "{}{}{} {}{} {}",
            idx_str.dimmed(),
            name.bold(),
            " ".repeat(padding),
            paint_house(&house, &record.house),
            " ".repeat(house_padding),
            slug.dimmed()
        );
    }

    if let Some(page) = page {
        println!(
            "{}",
            format!(
                "\nPage {}/{} ({} records)",
                page.page, page.total_pages, page.total
            )
            .dimmed()
        );
    }
}

pub(super) fn print_sheets(records: &[Record], locale: Locale) {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            println!("\n================================\n");
        }

        let rows = sheet::detail_rows(record, locale);
        let width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);

        println!(
            "{} {}",
            record.display_name().bold(),
            format!("({})", record.slug).dimmed()
        );
        println!("--------------------------------");
        for row in rows {
            let padding = width.saturating_sub(row.label.width());
            let value = if row.field == Field::House {
                paint_house(&row.value, &record.house)
            } else {
                row.value.normal()
            };
            println!("{}:{} {}", row.label.yellow(), " ".repeat(padding), value);
        }
    }
}

pub(super) fn print_houses(houses: &[String]) {
    for house in houses {
        println!("{}", paint_house(house, house));
    }
}

pub(super) fn print_config(config: &AnuarioConfig) {
    for key in AnuarioConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn paint_house(text: &str, house: &str) -> ColoredString {
    match house.trim().to_lowercase().as_str() {
        "gryffindor" => text.red(),
        "slytherin" => text.green(),
        "ravenclaw" => text.blue(),
        "hufflepuff" => text.yellow(),
        _ => text.normal(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
