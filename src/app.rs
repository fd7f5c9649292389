//! Application flow: Loading → Menu → Playing
//!
//! Owns whichever scene is active and routes key presses, resizes, ticks and
//! draws to it.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::game_loop::Tickable;
use crate::input::{Direction, DirectionKeys, SharedDirection};
use crate::renderer::{Canvas, draw_centered_text, draw_game, string_height};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

const TITLE_FONT_SIZE: i32 = 8;
const MENU_PROMPT: &str = "Enter the number of balls";

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Digit(u8),
    Backspace,
    Enter,
    Escape,
    Other,
}

impl Key {
    /// Key for a typed character
    pub fn from_char(c: char) -> Self {
        match c {
            '0'..='9' => Key::Digit(c as u8 - b'0'),
            '\n' | '\r' => Key::Enter,
            '\u{8}' => Key::Backspace,
            '\u{1b}' => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// What the host should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Continue,
    Quit,
}

/// Ball-count prompt
#[derive(Debug, Clone, Default)]
pub struct MenuScene {
    input: String,
}

impl MenuScene {
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Handle a released key. Returns the ball count once Enter confirms it.
    fn key_released(&mut self, key: Key) -> Option<NonZeroUsize> {
        match key {
            // Single digit entry; zero balls is not a game
            Key::Digit(0) => None,
            Key::Digit(d) => {
                self.input = d.to_string();
                None
            }
            Key::Backspace => {
                self.input.pop();
                None
            }
            Key::Enter => self.input.parse().ok(),
            _ => None,
        }
    }
}

/// Active scene
#[derive(Debug)]
pub enum Scene {
    Loading,
    Menu(MenuScene),
    Playing(Box<GameState>),
}

impl Scene {
    pub fn name(&self) -> &'static str {
        match self {
            Scene::Loading => "loading",
            Scene::Menu(_) => "menu",
            Scene::Playing(_) => "playing",
        }
    }
}

/// The whole application
#[derive(Debug)]
pub struct App {
    scene: Scene,
    settings: Settings,
    keys: DirectionKeys,
    human_input: Arc<SharedDirection>,
    screen: (u32, u32),
    next_seed: u64,
}

impl App {
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("Loading");
        Self {
            scene: Scene::Loading,
            screen: (settings.screen_width, settings.screen_height),
            settings,
            keys: DirectionKeys::new(),
            human_input: Arc::new(SharedDirection::new()),
            next_seed: seed,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Running match, if any
    pub fn game(&self) -> Option<&GameState> {
        match &self.scene {
            Scene::Playing(state) => Some(state.as_ref()),
            _ => None,
        }
    }

    /// Input cell read by human-controlled paddles
    pub fn human_input(&self) -> Arc<SharedDirection> {
        Arc::clone(&self.human_input)
    }

    /// Resources are ready; show the menu
    pub fn finish_loading(&mut self) {
        if matches!(self.scene, Scene::Loading) {
            self.change_scene(Scene::Menu(MenuScene::default()));
        }
    }

    /// Start a match immediately, bypassing the menu
    pub fn start_game(&mut self, ball_count: NonZeroUsize) {
        let (left, right) = self.settings.controllers(&self.human_input);
        let seed = self.next_seed;
        self.next_seed = self.next_seed.wrapping_add(1);

        self.keys = DirectionKeys::new();
        self.human_input.set(Direction::None);

        let state = GameState::new(ball_count, left, right, seed);
        self.change_scene(Scene::Playing(Box::new(state)));
    }

    fn change_scene(&mut self, scene: Scene) {
        log::info!("Scene {} -> {}", self.scene.name(), scene.name());
        self.scene = scene;
        // Tell the new scene how big the screen is
        let (w, h) = self.screen;
        self.size_changed(w, h);
    }

    pub fn key_pressed(&mut self, key: Key) -> AppCommand {
        if key == Key::Escape {
            log::info!("Quit requested");
            return AppCommand::Quit;
        }

        if let Scene::Playing(_) = self.scene {
            let dir = match key {
                Key::Up => self.keys.press(Direction::Up),
                Key::Down => self.keys.press(Direction::Down),
                _ => return AppCommand::Continue,
            };
            self.human_input.set(dir);
        }
        AppCommand::Continue
    }

    pub fn key_released(&mut self, key: Key) -> AppCommand {
        match &mut self.scene {
            Scene::Loading => {}
            Scene::Menu(menu) => {
                if let Some(balls) = menu.key_released(key) {
                    self.start_game(balls);
                }
            }
            Scene::Playing(_) => {
                let dir = match key {
                    Key::Up => self.keys.release(Direction::Up),
                    Key::Down => self.keys.release(Direction::Down),
                    _ => return AppCommand::Continue,
                };
                self.human_input.set(dir);
            }
        }
        AppCommand::Continue
    }

    /// Press and release in one go, as typed text arrives
    pub fn type_key(&mut self, key: Key) -> AppCommand {
        match self.key_pressed(key) {
            AppCommand::Quit => AppCommand::Quit,
            AppCommand::Continue => self.key_released(key),
        }
    }

    pub fn size_changed(&mut self, width: u32, height: u32) {
        self.screen = (width, height);
        if let Scene::Playing(state) = &mut self.scene {
            state.size_changed(width, height);
        }
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let (w, h) = (self.screen.0 as i32, self.screen.1 as i32);
        match &self.scene {
            Scene::Loading => {
                let y = h / 2 - string_height(TITLE_FONT_SIZE) / 2;
                draw_centered_text(canvas, w, "Loading", y, TITLE_FONT_SIZE);
            }
            Scene::Menu(menu) => {
                let y = h / 2 - 50 - string_height(TITLE_FONT_SIZE);
                draw_centered_text(canvas, w, MENU_PROMPT, y, TITLE_FONT_SIZE);
                draw_centered_text(canvas, w, menu.input(), h / 2 + 50, TITLE_FONT_SIZE);
            }
            Scene::Playing(state) => draw_game(state, canvas),
        }
    }
}

impl Tickable for App {
    fn tick(&mut self) {
        if let Scene::Playing(state) = &mut self.scene {
            for goal in tick(state) {
                let (left, right) = state.scores();
                log::info!("Point to {:?}: {left} - {right}", goal.side);
            }
        }
    }
}
