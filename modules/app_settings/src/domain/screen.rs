//! Settings screen composition
//!
//! Headless data source for a sectioned list picker: one row per action,
//! followed by one section per entry with a row per option. Rendering is
//! left to the host UI.

use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::contract::{SelectionType, SettingEntry};

use super::entries::capitalized;

const DEFAULT_PAGE_TITLE: &str = "Settings";

type ActionCallback = Arc<dyn Fn(&SettingsAction) + Send + Sync>;

/// Fire-and-forget item shown above the settings
#[derive(Clone)]
pub struct SettingsAction {
    pub title: String,
    pub url: Option<Url>,
    on_select: Option<ActionCallback>,
}

impl SettingsAction {
    /// Action that opens `url` in the host's browser
    pub fn link(title: impl Into<String>, url: Url) -> Self {
        Self {
            title: title.into(),
            url: Some(url),
            on_select: None,
        }
    }

    /// Action that runs `callback` when selected
    pub fn callback(
        title: impl Into<String>,
        callback: impl Fn(&SettingsAction) + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: title.into(),
            url: None,
            on_select: Some(Arc::new(callback)),
        }
    }

    pub fn is_external_link(&self) -> bool {
        self.url.is_some()
    }
}

impl fmt::Debug for SettingsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsAction")
            .field("title", &self.title)
            .field("url", &self.url)
            .field("has_callback", &self.on_select.is_some())
            .finish()
    }
}

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Action { title: String },
    Option { title: String, selected: bool },
}

/// What happened after a row was tapped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Host should present the link
    OpenLink(Url),
    /// An action callback ran (or the action had none)
    ActionInvoked,
    /// An option was persisted; host should reload
    SettingUpdated,
}

/// Ordered actions and entries making up one settings page
pub struct SettingsScreen {
    actions: Vec<SettingsAction>,
    settings: Vec<Arc<dyn SettingEntry>>,
    page_title: Option<String>,
}

impl SettingsScreen {
    pub fn new(actions: Vec<SettingsAction>, settings: Vec<Arc<dyn SettingEntry>>) -> Self {
        Self {
            actions,
            settings,
            page_title: None,
        }
    }

    pub fn with_page_title(mut self, title: impl Into<String>) -> Self {
        self.page_title = Some(title.into());
        self
    }

    pub fn page_title(&self) -> &str {
        self.page_title.as_deref().unwrap_or(DEFAULT_PAGE_TITLE)
    }

    pub fn actions(&self) -> &[SettingsAction] {
        &self.actions
    }

    pub fn settings(&self) -> &[Arc<dyn SettingEntry>] {
        &self.settings
    }

    pub fn number_of_sections(&self) -> usize {
        self.actions.len() + self.settings.len()
    }

    pub fn number_of_rows(&self, section: usize) -> usize {
        match self.section(section) {
            Section::Action(_) => 1,
            Section::Setting(entry) => entry.supported_options().len(),
        }
    }

    /// Header of `section`; actions have none
    pub fn section_title(&self, section: usize) -> Option<String> {
        match self.section(section) {
            Section::Action(_) => None,
            Section::Setting(entry) => Some(entry.title()),
        }
    }

    pub fn row(&self, section: usize, row: usize) -> Row {
        match self.cell(section, row) {
            Section::Action(action) => Row::Action {
                title: capitalized(&action.title),
            },
            Section::Setting(entry) => match entry.selection_type() {
                SelectionType::Single => Row::Option {
                    title: capitalized(&entry.display_name_for_option_at_index(row)),
                    selected: entry.has_selected_option_at_index(row),
                },
            },
        }
    }

    /// Handle a tap on (`section`, `row`)
    pub fn select(&self, section: usize, row: usize) -> Selection {
        match self.cell(section, row) {
            Section::Action(action) => {
                if let Some(url) = &action.url {
                    return Selection::OpenLink(url.clone());
                }
                if let Some(callback) = &action.on_select {
                    callback(action);
                }
                Selection::ActionInvoked
            }
            Section::Setting(entry) => {
                entry.save_with_supported_value(row);
                tracing::debug!(key = %entry.persistent_key(), row, "setting updated from picker");
                Selection::SettingUpdated
            }
        }
    }

    /// Section of (`section`, `row`); action sections hold a single row
    #[track_caller]
    fn cell(&self, section: usize, row: usize) -> Section<'_> {
        let found = self.section(section);
        if let Section::Action(_) = found {
            assert!(
                row == 0,
                "row {row} out of range for action section {section} with 1 row"
            );
        }
        found
    }

    #[track_caller]
    fn section(&self, section: usize) -> Section<'_> {
        if section < self.actions.len() {
            return Section::Action(&self.actions[section]);
        }
        let index = section - self.actions.len();
        assert!(
            index < self.settings.len(),
            "section {section} out of range for screen with {} sections",
            self.number_of_sections()
        );
        Section::Setting(self.settings[index].as_ref())
    }
}

enum Section<'a> {
    Action(&'a SettingsAction),
    Setting(&'a dyn SettingEntry),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AppearanceSetting, TypedStore};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_external_link_detection() {
        let link = SettingsAction::link(
            "privacy policy",
            Url::parse("https://example.com/privacy").unwrap(),
        );
        let callback = SettingsAction::callback("reset", |_| {});
        assert!(link.is_external_link());
        assert!(!callback.is_external_link());
    }

    #[test]
    fn test_sections_put_actions_first() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let screen = SettingsScreen::new(
            vec![SettingsAction::callback("clear cache", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            })],
            vec![Arc::new(AppearanceSetting::new(TypedStore::in_memory()))],
        );

        assert_eq!(screen.page_title(), "Settings");
        assert_eq!(screen.number_of_sections(), 2);
        assert_eq!(screen.number_of_rows(0), 1);
        assert_eq!(screen.number_of_rows(1), 3);
        assert_eq!(screen.section_title(0), None);
        assert_eq!(screen.section_title(1).as_deref(), Some("Appearance"));
        assert_eq!(
            screen.row(0, 0),
            Row::Action {
                title: "Clear Cache".into()
            }
        );

        assert_eq!(screen.select(0, 0), Selection::ActionInvoked);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_selecting_an_option_moves_the_checkmark() {
        let screen = SettingsScreen::new(
            Vec::new(),
            vec![Arc::new(AppearanceSetting::new(TypedStore::in_memory()))],
        )
        .with_page_title("Debug");

        assert_eq!(screen.page_title(), "Debug");
        assert_eq!(
            screen.row(0, 0),
            Row::Option {
                title: "System".into(),
                selected: true
            }
        );

        assert_eq!(screen.select(0, 2), Selection::SettingUpdated);
        assert_eq!(
            screen.row(0, 2),
            Row::Option {
                title: "Dark".into(),
                selected: true
            }
        );
        assert_eq!(
            screen.row(0, 0),
            Row::Option {
                title: "System".into(),
                selected: false
            }
        );
    }

    #[test]
    fn test_link_selection_returns_url() {
        let url = Url::parse("https://example.com/help").unwrap();
        let screen =
            SettingsScreen::new(vec![SettingsAction::link("help", url.clone())], Vec::new());
        assert_eq!(screen.select(0, 0), Selection::OpenLink(url));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_unknown_section_panics() {
        let screen = SettingsScreen::new(Vec::new(), Vec::new());
        let _ = screen.number_of_rows(0);
    }

    #[test]
    #[should_panic(expected = "row 7 out of range for action section 0")]
    fn test_action_row_past_the_single_row_panics() {
        let screen = SettingsScreen::new(
            vec![SettingsAction::callback("reset", |_| panic!("callback ran"))],
            Vec::new(),
        );
        let _ = screen.select(0, 7);
    }

    #[test]
    #[should_panic(expected = "row 1 out of range for action section 0")]
    fn test_action_row_lookup_past_the_single_row_panics() {
        let screen =
            SettingsScreen::new(vec![SettingsAction::callback("reset", |_| {})], Vec::new());
        let _ = screen.row(0, 1);
    }
}
