//! Named paragraph styles referenced by `ParagraphStyle::style_id`.

use docx_rs::{AlignmentType, Docx, Style, StyleType};

/// Heading sizes in half-points for levels 1 through 9.
const HEADING_SIZES: [usize; 9] = [32, 26, 24, 22, 22, 22, 22, 22, 22];

const HEADING_COLOR: &str = "2F5496";

fn heading_style(level: usize, size: usize) -> Style {
    let style_id = format!("Heading{}", level);
    let name = format!("heading {}", level);
    Style::new(style_id.as_str(), StyleType::Paragraph)
        .name(name.as_str())
        .size(size)
        .bold()
        .color(HEADING_COLOR)
}

/// Register Title, Heading 1-9, the two list styles and the table style.
pub fn add_styles(mut docx: Docx) -> Docx {
    let title = Style::new("Title", StyleType::Paragraph)
        .name("Title")
        .size(56)
        .align(AlignmentType::Center);
    docx = docx.add_style(title);

    for (idx, size) in HEADING_SIZES.iter().enumerate() {
        docx = docx.add_style(heading_style(idx + 1, *size));
    }

    let list_bullet = Style::new("ListBullet", StyleType::Paragraph)
        .name("List Bullet")
        .indent(Some(720), None, None, None);
    let list_number = Style::new("ListNumber", StyleType::Paragraph)
        .name("List Number")
        .indent(Some(720), None, None, None);
    let table_grid = Style::new("TableGrid", StyleType::Table).name("Table Grid");

    docx.add_style(list_bullet)
        .add_style(list_number)
        .add_style(table_grid)
}
