use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use std::path::PathBuf;
use std::time::{Instant, SystemTime};

use crate::config::Config;
use crate::nav::{NavSettings, SlideNavigator};
use crate::storage::SaveReceipt;
use crate::story::{SaveKind, SavePayload, SlideKind};
use crate::ui::commands::{UiCommand, UiCommandSender};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState, Notice};
use crate::ui::mvi::Reducer;
use crate::ui::preview::ThumbnailCache;

/// Share of a page moved by one mouse wheel notch.
///
/// Above one half, so a single notch always lands on the neighbouring slide.
const WHEEL_PAGE_FRACTION: f32 = 0.6;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Editor,
    Preview,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    config: Config,
    size: Option<(u16, u16)>,
    /// Story being authored (MVI pattern).
    editor: EditorState,
    /// Present while the preview reel is open.
    navigator: Option<SlideNavigator>,
    thumbnails: ThumbnailCache,
    command_sender: Option<UiCommandSender>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            size: None,
            editor: EditorState::default(),
            navigator: None,
            thumbnails: ThumbnailCache::default(),
            command_sender: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        if self.navigator.is_some() {
            Screen::Preview
        } else {
            Screen::Editor
        }
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn navigator(&self) -> Option<&SlideNavigator> {
        self.navigator.as_ref()
    }

    pub fn navigator_mut(&mut self) -> Option<&mut SlideNavigator> {
        self.navigator.as_mut()
    }

    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Dispatch an intent to the editor reducer.
    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Replace the editor contents with a saved story.
    pub fn load_story(&mut self, payload: SavePayload) {
        self.dispatch_editor(EditorIntent::Load { payload });
    }

    // ========================================================================
    // Preview
    // ========================================================================

    /// Open the reel at slide 0. Refused for an empty story.
    pub fn open_preview(&mut self, now: Instant) {
        if self.editor.slides.is_empty() {
            self.dispatch_editor(EditorIntent::Notify {
                notice: Notice::error("Add at least one slide to preview"),
            });
            return;
        }
        let snapshot = self.editor.slides.snapshot();
        self.thumbnails = ThumbnailCache::build(&snapshot);
        let mut navigator =
            SlideNavigator::open(snapshot, NavSettings::from(&self.config.preview), now);
        if let Some((_, rows)) = self.size {
            navigator.set_page_height(self.page_height(rows));
        }
        self.navigator = Some(navigator);
    }

    pub fn close_preview(&mut self, now: Instant) {
        if let Some(mut navigator) = self.navigator.take() {
            navigator.close(now);
        }
        self.thumbnails = ThumbnailCache::default();
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(navigator) = &mut self.navigator {
            navigator.tick(now);
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let page_height = self.page_height(rows);
        if let Some(navigator) = &mut self.navigator {
            navigator.set_page_height(page_height);
        }
    }

    /// Mouse wheel scrolls the reel, a left-button drag is a swipe.
    pub fn on_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let units_per_row = self.config.preview.units_per_row;
        let Some(navigator) = &mut self.navigator else {
            return;
        };
        let y = f32::from(mouse.row) * units_per_row;
        let notch = navigator.page_height() * WHEEL_PAGE_FRACTION;
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                navigator.scroll_by(notch, now);
                navigator.snap_to_current();
            }
            MouseEventKind::ScrollUp => {
                navigator.scroll_by(-notch, now);
                navigator.snap_to_current();
            }
            MouseEventKind::Down(MouseButton::Left) => navigator.touch_start(y),
            MouseEventKind::Up(MouseButton::Left) => {
                navigator.touch_end(y, now);
            }
            _ => {}
        }
    }

    fn page_height(&self, rows: u16) -> f32 {
        f32::from(rows.max(1)) * self.config.preview.units_per_row
    }

    // ========================================================================
    // Editor side effects
    // ========================================================================

    pub fn on_paste(&mut self, text: &str) {
        if self.screen() == Screen::Editor {
            self.dispatch_editor(EditorIntent::InsertText(text.to_string()));
        }
    }

    /// Enter in the composer: add a text slide or start loading an image.
    pub fn submit_composer(&mut self) {
        match self.editor.composer_kind {
            SlideKind::Text => self.dispatch_editor(EditorIntent::SubmitText),
            SlideKind::Image => {
                if self.editor.loading_image {
                    return;
                }
                let path = self.editor.composer.trim();
                if path.is_empty() {
                    self.dispatch_editor(EditorIntent::Notify {
                        notice: Notice::error("Enter the path of an image file"),
                    });
                    return;
                }
                let path = expand_home(path);
                if self.send_command(UiCommand::LoadImage { path }) {
                    self.dispatch_editor(EditorIntent::ImageRequested);
                }
            }
        }
    }

    pub fn on_image_loaded(&mut self, uri: String) {
        self.dispatch_editor(EditorIntent::ImageLoaded { uri });
    }

    pub fn on_image_failed(&mut self, message: String) {
        self.dispatch_editor(EditorIntent::ImageFailed { message });
    }

    /// Validate and hand the story to the save sink.
    pub fn request_save(&mut self, kind: SaveKind) {
        if self.editor.is_saving() {
            return;
        }
        let payload = self.editor.to_payload(kind, SystemTime::now());
        if let Err(err) = payload.validate() {
            tracing::warn!(kind = kind.label(), error = %err, "Save rejected");
            self.dispatch_editor(EditorIntent::SaveFailed {
                message: err.to_string(),
            });
            return;
        }
        if self.send_command(UiCommand::Save { payload }) {
            tracing::info!(kind = kind.label(), "Save requested");
            self.dispatch_editor(EditorIntent::SaveStarted { kind });
        }
    }

    pub fn on_save_finished(&mut self, result: Result<SaveReceipt, String>) {
        match result {
            Ok(receipt) => self.dispatch_editor(EditorIntent::SaveSucceeded {
                kind: receipt.kind,
                location: receipt.location,
            }),
            Err(message) => self.dispatch_editor(EditorIntent::SaveFailed { message }),
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            self.dispatch_editor(EditorIntent::Notify {
                notice: Notice::error("Background worker is not running"),
            });
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Command send failed");
                self.dispatch_editor(EditorIntent::Notify {
                    notice: Notice::error(format!("Command send failed: {err}")),
                });
                false
            }
        }
    }
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
