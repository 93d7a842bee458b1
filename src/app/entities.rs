//! AppEntities - Global Entity Handles
//!
//! State is split by update frequency: the table changes on every keystroke,
//! the log on background events, the locale almost never.

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::services::{HttpUserSource, UserService};
use crate::state::{I18nState, LogState, UserTable};

#[derive(Clone)]
pub struct AppEntities {
    /// Member table engine
    pub table: Entity<UserTable>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    pub fn init(page_size: usize, cx: &mut App) -> Self {
        Self {
            table: cx.new(|_| UserTable::new(page_size)),
            logs: cx.new(|_| LogState::default()),
            i18n: cx.new(|_| I18nState::default()),
        }
    }
}

/// Background services plus the configuration they were built from
pub struct AppServices {
    pub users: UserService<HttpUserSource>,
    pub config: AppConfig,
}

impl Global for AppServices {}
