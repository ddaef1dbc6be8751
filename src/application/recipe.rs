//! # Recipe Cards
//!
//! Turns a spreadsheet row into a recipe card: ingredient columns are mapped to
//! display labels, sorted into groups, and rendered as a bordered text table.

use crate::domain::types::SearchResult;
use crate::strings::messages;

/// Header of the optional column that holds the amount for the column before it.
pub const QUANTITY_HEADER: &str = "(кол-во)";
pub const DEFAULT_ICON: &str = "•";
pub const DEFAULT_GROUP: &str = "Прочее";

/// Groups in display order. Groups not listed here follow in encounter order.
pub const GROUP_ORDER: [&str; 7] = [
    "Основа",
    "Молочные",
    "Соки",
    "Фрукты",
    "Сиропы",
    "Добавки",
    DEFAULT_GROUP,
];

const PLACEHOLDERS: [&str; 2] = ["-", "—"];

const BORDER_TOP: &str = "┌─ РЕЦЕПТ ───────────────────────────────┐";
const BORDER_BOTTOM: &str = "└────────────────────────────────────────┘";
const BORDER_SIDE: &str = "│";

/// How a known column is displayed: (header, icon, label, group).
/// A `None` group falls back to [`DEFAULT_GROUP`].
const COLUMNS: &[(&str, Option<&str>, &str, Option<&str>)] = &[
    ("СПРАЙТ", Some("🥤"), "Спрайт", Some("Основа")),
    ("ВОДА С/Г", Some("💧"), "Вода с/г", Some("Основа")),
    ("ШВЕПС", Some("🫧"), "Швепс", Some("Основа")),
    ("МОЛОКО", Some("🥛"), "Молоко", Some("Молочные")),
    ("СЛИВКИ", Some("🧁"), "Сливки", Some("Молочные")),
    ("СОК", Some("🍹"), "Сок", Some("Соки")),
    ("ФРУКТЫ", Some("🍓"), "Фрукты", Some("Фрукты")),
    ("СИРОП", Some("🍯"), "Сироп", Some("Сиропы")),
    ("ДОБАВКИ", Some("✨"), "Добавки", Some("Добавки")),
    (QUANTITY_HEADER, None, QUANTITY_HEADER, None),
];

/// Display attributes of a column header.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStyle {
    pub icon: Option<&'static str>,
    pub label: String,
    pub group: String,
}

/// Looks a header up in the column table. Matching ignores case and surrounding spaces.
pub fn column_style(header: &str) -> ColumnStyle {
    let raw = header.trim();
    let key = raw.to_uppercase();
    COLUMNS
        .iter()
        .find(|(name, ..)| name.to_uppercase() == key)
        .map(|(_, icon, label, group)| ColumnStyle {
            icon: *icon,
            label: label.to_string(),
            group: group.unwrap_or(DEFAULT_GROUP).to_string(),
        })
        .unwrap_or_else(|| ColumnStyle {
            icon: Some(DEFAULT_ICON),
            label: raw.to_string(),
            group: DEFAULT_GROUP.to_string(),
        })
}

fn is_quantity_header(header: &str) -> bool {
    header.trim().to_uppercase() == QUANTITY_HEADER.to_uppercase()
}

fn is_blank(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

/// One rendered line of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub icon: Option<&'static str>,
    pub label: String,
    pub value: String,
    pub quantity: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientGroup {
    pub name: String,
    pub items: Vec<Ingredient>,
}

/// Extracts the ingredients of `row` and groups them in display order.
///
/// Cells are read from index 1 (index 0 is the item name) while both rows have
/// a cell. A value directly followed by a quantity column takes that column's
/// cell as its amount, and both cells are consumed.
pub fn parse_row(headers: &[String], row: &[String]) -> Vec<IngredientGroup> {
    let limit = headers.len().min(row.len());
    let mut encountered: Vec<IngredientGroup> = Vec::new();

    let mut i = 1;
    while i < limit {
        let header = headers[i].trim();
        let value = row[i].trim();
        if header.is_empty() || is_blank(value) {
            i += 1;
            continue;
        }

        let style = column_style(header);
        let mut quantity = None;
        if headers.get(i + 1).is_some_and(|h| is_quantity_header(h)) {
            quantity = row
                .get(i + 1)
                .map(|q| q.trim())
                .filter(|q| !is_blank(q))
                .map(str::to_string);
            i += 1;
        }

        let item = Ingredient {
            icon: style.icon,
            label: style.label,
            value: value.to_string(),
            quantity,
        };
        match encountered.iter_mut().find(|g| g.name == style.group) {
            Some(group) => group.items.push(item),
            None => encountered.push(IngredientGroup {
                name: style.group,
                items: vec![item],
            }),
        }
        i += 1;
    }

    order_groups(encountered)
}

/// Puts groups listed in [`GROUP_ORDER`] first, in that order; the rest keep
/// their relative order.
pub fn order_groups(mut groups: Vec<IngredientGroup>) -> Vec<IngredientGroup> {
    let mut ordered = Vec::with_capacity(groups.len());
    for name in GROUP_ORDER {
        if let Some(pos) = groups.iter().position(|g| g.name == name) {
            ordered.push(groups.remove(pos));
        }
    }
    ordered.extend(groups);
    ordered
}

/// Renders groups as a bordered table. Empty groups are skipped.
pub fn render_table(groups: &[IngredientGroup]) -> String {
    let mut lines = vec![BORDER_TOP.to_string()];
    for group in groups.iter().filter(|g| !g.items.is_empty()) {
        lines.push(format!("{BORDER_SIDE} [{}]", group.name));
        let label_width = group
            .items
            .iter()
            .map(|item| item.label.chars().count())
            .max()
            .unwrap_or(0);

        for item in &group.items {
            let (left, width) = match item.icon {
                // icon + space
                Some(icon) => (format!("{icon} {}", item.label), label_width + 2),
                None => (item.label.clone(), label_width),
            };
            let right = match &item.quantity {
                Some(quantity) => format!("{} ({quantity})", item.value),
                None => item.value.clone(),
            };
            lines.push(format!("{BORDER_SIDE} {left:<width$} {BORDER_SIDE} {right}"));
        }
        lines.push(BORDER_SIDE.to_string());
    }
    if lines.last().is_some_and(|l| l == BORDER_SIDE) {
        lines.pop();
    }
    lines.push(BORDER_BOTTOM.to_string());
    lines.join("\n")
}

/// Formats a complete recipe card for one row of `sheet_title`.
pub fn format_recipe(sheet_title: &str, headers: &[String], row: &[String]) -> String {
    let name = row.first().map(String::as_str).unwrap_or_default();
    let title = messages::card_title(name, sheet_title);
    let groups = parse_row(headers, row);
    if groups.iter().all(|g| g.items.is_empty()) {
        return format!("{title}\n{}", messages::NO_INGREDIENTS);
    }
    messages::card(&title, &render_table(&groups))
}

/// Formats the card of a search result.
pub fn format_result(result: &SearchResult) -> String {
    format_recipe(&result.sheet_title, &result.headers, &result.row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_milk_line() {
        let headers = strings(&["Название", "МОЛОКО"]);
        let row = strings(&["Латте", "200"]);
        let groups = parse_row(&headers, &row);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "Молочные");

        let table = render_table(&groups);
        assert!(table.contains("│ [Молочные]"));
        assert!(table.contains("🥛 Молоко │ 200"));
        assert!(table.starts_with(BORDER_TOP));
        assert!(table.ends_with(BORDER_BOTTOM));
    }

    #[test]
    fn test_card_title_and_block() {
        let headers = strings(&["Название", "МОЛОКО"]);
        let row = strings(&["Латте", "200"]);
        let card = format_recipe("Классика", &headers, &row);
        assert!(card.starts_with("**📋 Латте** · _Классика_\n```\n"));
        assert!(card.contains("🥛 Молоко │ 200"));
        assert!(card.ends_with("\n```"));
    }

    #[test]
    fn test_placeholders_produce_no_lines() {
        let headers = strings(&["Название", "СИРОП", "СОК", "СЛИВКИ", "ФРУКТЫ"]);
        let row = strings(&["Лимонад", "-", "—", "", "Лимон"]);
        let groups = parse_row(&headers, &row);
        let lines: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(lines, 1);
        assert_eq!(groups[0].items[0].value, "Лимон");
    }

    #[test]
    fn test_all_placeholders_render_no_data() {
        let headers = strings(&["Название", "СИРОП"]);
        let row = strings(&["Вода", "-"]);
        let card = format_recipe("Прочее", &headers, &row);
        assert!(card.ends_with(messages::NO_INGREDIENTS));
        assert!(!card.contains("```"));
    }

    #[test]
    fn test_quantity_pairing() {
        let headers = strings(&["Название", "СИРОП", "(кол-во)", "МОЛОКО"]);
        let row = strings(&["Раф", "Ваниль", "20", "150"]);
        let groups = parse_row(&headers, &row);
        assert_eq!(groups[0].name, "Молочные");
        assert_eq!(groups[1].name, "Сиропы");
        let syrup = &groups[1].items;
        assert_eq!(syrup.len(), 1);
        assert_eq!(syrup[0].quantity.as_deref(), Some("20"));
        assert!(render_table(&groups).contains("🍯 Сироп │ Ваниль (20)"));
    }

    #[test]
    fn test_quantity_header_case_insensitive() {
        let headers = strings(&["Название", "СИРОП", " (КОЛ-ВО) "]);
        let row = strings(&["Раф", "Карамель", "15"]);
        let groups = parse_row(&headers, &row);
        assert_eq!(groups[0].items[0].quantity.as_deref(), Some("15"));
    }

    #[test]
    fn test_orphan_quantity_falls_into_default_group() {
        let headers = strings(&["Название", "СИРОП", "(кол-во)"]);
        let row = strings(&["Раф", "", "15"]);
        let groups = parse_row(&headers, &row);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, DEFAULT_GROUP);
        assert_eq!(groups[0].items[0].icon, None);
        assert!(render_table(&groups).contains("│ (кол-во) │ 15"));
    }

    #[test]
    fn test_group_order_and_unknown_headers() {
        let headers = strings(&["Название", "Лёд", "СИРОП", "СПРАЙТ", "СЛИВКИ", "ВОДА С/Г"]);
        let row = strings(&["Бамбл", "100 г", "Кокос", "200", "30", "50"]);
        let groups = parse_row(&headers, &row);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Основа", "Молочные", "Сиропы", "Прочее"]);

        let base: Vec<&str> = groups[0].items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(base, vec!["Спрайт", "Вода с/г"]);
        assert_eq!(groups[3].items[0].icon, Some(DEFAULT_ICON));
        assert_eq!(groups[3].items[0].label, "Лёд");
    }

    #[test]
    fn test_labels_padded_to_group_width() {
        let headers = strings(&["Название", "СОК", "СОК"]);
        let row = strings(&["Микс", "Яблоко", "Апельсин"]);
        let mut groups = parse_row(&headers, &row);
        groups[0].items[1].label = "Сок долгий".to_string();
        let table = render_table(&groups);
        assert!(table.contains("│ 🍹 Сок        │ Яблоко"));
        assert!(table.contains("│ 🍹 Сок долгий │ Апельсин"));
    }

    #[test]
    fn test_separators_between_groups_only() {
        let headers = strings(&["Название", "МОЛОКО", "СИРОП"]);
        let row = strings(&["Раф", "150", "Ваниль"]);
        let table = render_table(&parse_row(&headers, &row));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.iter().filter(|l| **l == "│").count(), 1);
        assert_eq!(lines[lines.len() - 2], "│ 🍯 Сироп │ Ваниль");
    }

    #[test]
    fn test_short_row_stops_at_last_cell() {
        let headers = strings(&["Название", "МОЛОКО", "СИРОП", "СОК"]);
        let row = strings(&["Флэт", "180"]);
        let groups = parse_row(&headers, &row);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].items.len(), 1);
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let groups = vec![
            IngredientGroup {
                name: "Основа".to_string(),
                items: Vec::new(),
            },
            IngredientGroup {
                name: "Соки".to_string(),
                items: vec![Ingredient {
                    icon: Some("🍹"),
                    label: "Сок".to_string(),
                    value: "Вишня".to_string(),
                    quantity: None,
                }],
            },
        ];
        let table = render_table(&groups);
        assert!(!table.contains("[Основа]"));
        assert!(table.contains("[Соки]"));
    }

    #[test]
    fn test_extra_groups_keep_encounter_order() {
        let group = |name: &str| IngredientGroup {
            name: name.to_string(),
            items: Vec::new(),
        };
        let ordered = order_groups(vec![
            group("Лёд"),
            group("Соки"),
            group("Декор"),
            group("Основа"),
        ]);
        let names: Vec<&str> = ordered.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Основа", "Соки", "Лёд", "Декор"]);
    }

    #[test]
    fn test_column_lookup_ignores_case() {
        assert_eq!(column_style("  сок ").label, "Сок");
        assert_eq!(column_style("вода с/г").icon, Some("💧"));
        assert_eq!(column_style("лёд").group, DEFAULT_GROUP);
    }
}
