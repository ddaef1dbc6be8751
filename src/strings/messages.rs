//! # Messages
//!
//! Contains constant strings and format functions for user-facing messages.
//! Includes search replies, usage hints, and the recipe card frame.

use crate::domain::types::SearchResult;

pub const DRINK_NOT_FOUND: &str = "❌ Напиток не найден.";
pub const NOTHING_FOUND: &str = "❌ Ничего не нашёл.";
pub const NO_INGREDIENTS: &str = "Нет данных по ингредиентам.";
pub const LIST_USAGE: &str = "Использование: /list мохито";
pub const ALL_USAGE: &str = "Использование: /all латте";
pub const UNKNOWN_COMMAND: &str = "❓ Неизвестная команда. /help — список команд.";
pub const FETCH_FAILED: &str = "⚠️ Не удалось прочитать таблицу. Попробуй позже.";

pub const SEVERAL_MATCHES_HEADER: &str = "Нашёл несколько вариантов:";
pub const MATCHES_HEADER: &str = "Совпадения:";
pub const TABS_HEADER: &str = "Вкладки:";
pub const CATEGORY_NOT_FOUND: &str = "Не нашёл такую категорию.\nДоступные вкладки:";

/// Backslash-escapes the characters that would open emphasis or code spans.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '*' | '_' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

pub fn category_header(query: &str) -> String {
    format!("Напитки в «{}»:", escape_markdown(query))
}

/// `N. <name> (🗂 <sheet>)`, numbered from 1.
pub fn numbered_entry(index: usize, result: &SearchResult) -> String {
    format!(
        "{}. {} (🗂 {})",
        index + 1,
        escape_markdown(result.name()),
        escape_markdown(&result.sheet_title)
    )
}

pub fn list_overflow(hidden: usize, query: &str) -> String {
    format!("…и ещё {hidden}. Используй /all {query}")
}

pub fn bullet(text: &str) -> String {
    format!("• {}", escape_markdown(text))
}

pub fn card_title(name: &str, sheet_title: &str) -> String {
    format!(
        "**📋 {}** · _{}_",
        escape_markdown(name),
        escape_markdown(sheet_title)
    )
}

/// Title followed by the table in a preformatted block.
pub fn card(title: &str, table: &str) -> String {
    format!("{title}\n```\n{table}\n```")
}
