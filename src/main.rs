//! Zellij plugin wrapper and entry point.
//!
//! This is the only module that talks to the Zellij host. It translates host
//! events into library [`Event`]s, runs them through [`handle_event`], and
//! executes the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`
//! 3. **Subscribe**: Key, Mouse, Timer, `WebRequestResult`, `PermissionRequestResult`
//! 4. **Update**: Map the event, delegate to the library, run actions
//! 5. **Render**: Record the viewport, call the library renderer
//!
//! # Event Mapping
//!
//! - `Key` → input, focus, navigation or paging events (see below)
//! - `Mouse(LeftClick)` → `Event::Click { line, col }`
//! - `Mouse(ScrollUp/ScrollDown)` → `Event::CursorUp` / `Event::CursorDown`
//! - `Timer` → `Event::DebounceElapsed`
//! - `WebRequestResult` → `Event::FetchCompleted` (request id from the context map)
//! - `PermissionRequestResult` → `Event::PermissionsResult`
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Ctrl+p`: Move the card cursor
//! - `Ctrl+u`: Clear the query
//! - `PageUp` / `PageDown`: Previous / next page
//!
//! Typing:
//! - Characters and `Backspace` edit the query
//! - `Enter` / `Tab` / `Down` / `Esc`: Focus the results
//!
//! Browsing:
//! - `j`/`Down`, `k`/`Up`: Move the cursor
//! - `Enter`: Open details
//! - `h`/`Left`/`p`, `l`/`Right`/`n`: Previous / next page
//! - `/`, `i`, `Esc`: Back to the search input
//! - `q`: Hide the plugin
//!
//! Detail overlay open:
//! - `Esc`, `q`, `Enter`: Close it; every other key is ignored

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Duration;
use zellij_tile::prelude::*;

use book_finder::{handle_event, Action, Config, Event, SearchFocus};

/// Context key carrying the request id through `web_request`.
const REQUEST_ID_KEY: &str = "request_id";

register_plugin!(State);

struct State {
    app: book_finder::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: book_finder::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        if let Err(e) = book_finder::observability::init_tracing(&config) {
            eprintln!("book-finder: tracing disabled: {e}");
        }

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        self.app = book_finder::initialize(&config);
        tracing::debug!(theme = %self.app.theme.name, "app state initialized");

        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::DebounceElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.set_viewport(rows, cols);
        book_finder::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if self.app.selected_book.is_some() {
            return match key.bare_key {
                BareKey::Esc | BareKey::Enter | BareKey::Char('q') => Some(Event::CloseDetail),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::CursorDown),
                BareKey::Char('p') => Some(Event::CursorUp),
                BareKey::Char('u') => Some(Event::ClearQuery),
                _ => None,
            };
        }
        if key.has_modifiers(&[KeyModifier::Alt]) {
            return None;
        }

        match key.bare_key {
            BareKey::PageUp => return Some(Event::PreviousPage),
            BareKey::PageDown => return Some(Event::NextPage),
            _ => {}
        }

        Some(match self.app.focus {
            SearchFocus::Typing => match key.bare_key {
                BareKey::Enter | BareKey::Tab | BareKey::Down | BareKey::Esc => Event::FocusResults,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            },
            SearchFocus::Browsing => match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::CursorDown,
                BareKey::Up | BareKey::Char('k') => Event::CursorUp,
                BareKey::Enter => Event::OpenDetail,
                BareKey::Left | BareKey::Char('h' | 'p') => Event::PreviousPage,
                BareKey::Right | BareKey::Char('l' | 'n') => Event::NextPage,
                BareKey::Esc | BareKey::Char('/' | 'i') => Event::FocusSearch,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            },
        })
    }

    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let line = usize::try_from(line).ok()?;
                Some(Event::Click { line, col })
            }
            Mouse::ScrollUp(_) => Some(Event::CursorUp),
            Mouse::ScrollDown(_) => Some(Event::CursorDown),
            _ => None,
        }
    }

    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(request_id) = context
            .get(REQUEST_ID_KEY)
            .and_then(|id| id.parse::<u64>().ok())
        else {
            tracing::debug!(status, "web request result without request id, ignoring");
            return None;
        };

        tracing::debug!(request_id, status, body_len = body.len(), "web request result");
        Some(Event::FetchCompleted {
            request_id,
            status,
            body,
        })
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleDebounce { delay_ms } => {
                set_timeout(Duration::from_millis(*delay_ms).as_secs_f64());
            }
            Action::FetchPage { request_id, url } => {
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());

                let mut context = BTreeMap::new();
                context.insert(REQUEST_ID_KEY.to_string(), request_id.to_string());

                tracing::debug!(request_id, url = %url, "issuing web request");
                web_request(url, HttpVerb::Get, headers, vec![], context);
            }
        }
    }
}
