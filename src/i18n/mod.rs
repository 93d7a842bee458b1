//! i18n - Internationalization Module
//!
//! Simple translation lookups keyed by string id.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::state::confirm::DeletePrompt;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Label for the language switcher
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// key -> (en, zh)
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    map.insert("app-title", ("Admin Dashboard", "管理面板"));

    // Toolbar
    map.insert("search-placeholder", ("Search by name, email or role", "按姓名、邮箱或角色搜索"));
    map.insert("action-delete-selected", ("Delete Selected", "删除所选"));
    map.insert("action-export", ("Export", "导出"));
    map.insert("action-refresh", ("Refresh", "刷新"));

    // Row actions
    map.insert("action-edit", ("Edit", "编辑"));
    map.insert("action-save", ("Save", "保存"));
    map.insert("action-delete", ("Delete", "删除"));
    map.insert("action-cancel", ("Cancel", "取消"));

    // Table columns
    map.insert("col-name", ("Name", "姓名"));
    map.insert("col-email", ("Email", "邮箱"));
    map.insert("col-role", ("Role", "角色"));
    map.insert("col-actions", ("Actions", "操作"));

    // Table states
    map.insert("table-no-data", ("No data", "无数据"));
    map.insert("table-no-match", ("No members match the search", "没有匹配的成员"));
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-load-failed", ("Could not load members", "无法加载成员"));

    // Pagination
    map.insert("pagination-go-to", ("Go to page:", "跳转到页:"));
    map.insert("pagination-go", ("Go", "跳转"));
    map.insert("pagination-invalid", ("Invalid page", "无效页码"));
    map.insert("pagination-summary", ("Showing {start}-{end} of {total}", "显示第 {start}-{end} 条，共 {total} 条"));
    map.insert("pagination-summary-empty", ("Showing 0 of {total}", "共 {total} 条"));

    // Confirm dialog
    map.insert("confirm-title", ("Confirm Delete", "确认删除"));
    map.insert("confirm-delete-row", ("Are you sure you want to delete {name}?", "确定要删除 {name} 吗？"));
    map.insert("confirm-delete-selected", ("Are you sure you want to delete the {count} selected rows?", "确定要删除所选的 {count} 行吗？"));

    // Status bar
    map.insert("status-selected", ("{count} selected", "已选 {count} 行"));
    map.insert("status-ready", ("Ready", "就绪"));

    map
}

fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key; unknown keys come back unchanged
pub fn t(locale: Locale, key: &str) -> String {
    match translations().get(key) {
        Some(&(en, zh)) => match locale {
            Locale::EnUS => en.to_string(),
            Locale::ZhCN => zh.to_string(),
        },
        None => key.to_string(),
    }
}

/// Translate a key and substitute a `{count}` placeholder
pub fn t_count(locale: Locale, key: &str, count: usize) -> String {
    t(locale, key).replace("{count}", &count.to_string())
}

/// "Showing 11-20 of 46" style range label; `start` is 0-based
pub fn range_summary(locale: Locale, start: usize, shown: usize, total: usize) -> String {
    if shown == 0 {
        return t(locale, "pagination-summary-empty").replace("{total}", &total.to_string());
    }
    t(locale, "pagination-summary")
        .replace("{start}", &(start + 1).to_string())
        .replace("{end}", &(start + shown).to_string())
        .replace("{total}", &total.to_string())
}

/// Dialog text for a pending delete
pub fn delete_prompt_text(locale: Locale, prompt: &DeletePrompt) -> String {
    match prompt {
        DeletePrompt::Row { name, .. } => t(locale, "confirm-delete-row").replace("{name}", name),
        DeletePrompt::Selected { count } => t_count(locale, "confirm-delete-selected", *count),
    }
}
