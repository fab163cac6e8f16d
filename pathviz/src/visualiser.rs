//! Terminal front end: maps keys and mouse input onto the [`Controller`]
//! and draws the grid with a status bar.

use std::time::Instant;

use pathviz_core::{
    CellType, GridError, PaintType, Point, TraversalState, VisualiserConfig,
    app::{Effect, Model},
    messages::{Key, MouseAction, Msg},
    screen::{Color, Glyph, Screen},
};
use pathviz_paths::strategies;

use crate::controller::{Controller, Outcome};

/// Rows above the grid: status line and algorithm description.
const HEADER_ROWS: i32 = 2;
/// Rows below the grid: key help and notices.
const FOOTER_ROWS: i32 = 2;
/// Minimum screen width so the status and help lines fit.
const MIN_WIDTH: i32 = 80;

const COL_BG: Color = Color::from_rgb(20, 20, 30);
const COL_EMPTY: Color = Color::from_rgb(60, 60, 75);
const COL_WALL: Color = Color::from_rgb(150, 150, 170);
const COL_START: Color = Color::from_rgb(80, 220, 100);
const COL_GOAL: Color = Color::from_rgb(230, 70, 70);
const COL_VISITED: Color = Color::from_rgb(40, 80, 150);
const COL_PATH: Color = Color::from_rgb(230, 200, 60);
const COL_TEXT: Color = Color::from_rgb(200, 200, 200);
const COL_DIM: Color = Color::from_rgb(130, 130, 150);
const COL_NOTICE: Color = Color::from_rgb(255, 180, 80);

const HELP: &str = "drag: paint  w/s/g/e: wall/start/goal/eraser  tab/1-5: algorithm  \
                    enter: play  c: clear path  x: clear grid  q: quit";

/// The interactive visualiser model.
pub struct Visualiser {
    controller: Controller,
    notice: Option<String>,
}

impl Visualiser {
    pub fn new(config: &VisualiserConfig) -> Result<Self, GridError> {
        Ok(Self {
            controller: Controller::new(config)?,
            notice: None,
        })
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Screen size needed to show the grid plus status lines.
    pub fn screen_size(&self) -> Point {
        let grid = self.controller.grid();
        Point::new(
            grid.width().max(MIN_WIDTH),
            grid.height() + HEADER_ROWS + FOOTER_ROWS,
        )
    }

    /// Screen position to grid position.
    fn to_grid(pos: Point) -> Point {
        pos.shift(0, -HEADER_ROWS)
    }

    fn report(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Notice(n) => self.notice = Some(n.to_string()),
            Outcome::Rejected(r) => log::trace!("request ignored: {r:?}"),
            Outcome::Applied => {}
        }
    }

    /// Step the selected algorithm through the registry.
    fn cycle_algorithm(&mut self, forward: bool) {
        let all = strategies();
        let current = self
            .controller
            .session()
            .algorithm_name()
            .and_then(|name| all.iter().position(|s| s.name == name));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => all.len() - 1,
            (Some(i), true) => (i + 1) % all.len(),
            (Some(i), false) => (i + all.len() - 1) % all.len(),
        };
        let outcome = self.controller.select_algorithm(all[next].name);
        self.report(outcome);
    }

    fn on_key(&mut self, key: Key, time: Instant) -> Option<Effect> {
        self.notice = None;
        let outcome = match key {
            Key::Escape | Key::Char('q') => return Some(Effect::End),
            Key::Char('w') => self.controller.select_paint_type(PaintType::Wall),
            Key::Char('s') => self.controller.select_paint_type(PaintType::Start),
            Key::Char('g') => self.controller.select_paint_type(PaintType::Goal),
            Key::Char('e') => self.controller.select_paint_type(PaintType::Eraser),
            Key::Tab => {
                self.cycle_algorithm(true);
                return None;
            }
            Key::BackTab => {
                self.cycle_algorithm(false);
                return None;
            }
            Key::Char(d @ '1'..='9') => {
                let i = d as usize - '1' as usize;
                match strategies().get(i) {
                    Some(s) => self.controller.select_algorithm(s.name),
                    None => return None,
                }
            }
            Key::Enter | Key::Char(' ') => self.controller.play(time),
            Key::Char('c') => self.controller.clear_path(),
            Key::Char('x') => self.controller.clear_grid(),
            _ => return None,
        };
        self.report(outcome);
        None
    }

    fn on_mouse(&mut self, action: MouseAction, pos: Point) {
        let p = Self::to_grid(pos);
        let outcome = match action {
            MouseAction::Main => self.controller.pointer_down(p),
            MouseAction::Move => self.controller.pointer_enter(p),
            MouseAction::Release => self.controller.pointer_up(),
        };
        self.report(outcome);
    }

    fn cell_glyph(cell_type: CellType, traversal: TraversalState) -> Glyph {
        let bg = match traversal {
            TraversalState::Unvisited => COL_BG,
            TraversalState::Visited => COL_VISITED,
            TraversalState::Path => COL_PATH,
        };
        match cell_type {
            CellType::Start => Glyph::new('S', COL_START, bg),
            CellType::Goal => Glyph::new('G', COL_GOAL, bg),
            CellType::Wall => Glyph::new('█', COL_WALL, COL_BG),
            CellType::None => Glyph::new('·', COL_EMPTY, bg),
        }
    }
}

impl Model for Visualiser {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::KeyDown { key, time } => self.on_key(key, time),
            Msg::Mouse { action, pos, .. } => {
                self.on_mouse(action, pos);
                None
            }
            Msg::Tick { time } => {
                self.controller.tick(time);
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::Init => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Glyph::new(' ', COL_TEXT, COL_BG));
        let session = self.controller.session();

        let algorithm = session.algorithm_name().unwrap_or("Select Algorithm");
        let state = if self.controller.is_busy() {
            let (fired, total) = self.controller.progress();
            format!("playing {fired}/{total}")
        } else {
            "idle".to_owned()
        };
        let status = format!(
            "{algorithm}  |  paint: {}  |  {state}",
            session.paint.name()
        );
        screen.print(Point::ZERO, &status, COL_TEXT, COL_BG);
        if let Some(desc) = session.algorithm_description() {
            screen.print(Point::new(0, 1), desc, COL_DIM, COL_BG);
        }

        for cell in self.controller.grid().iter() {
            let p = cell.pos.shift(0, HEADER_ROWS);
            screen.set(p, Self::cell_glyph(cell.cell_type, cell.traversal));
        }

        let footer = HEADER_ROWS + self.controller.grid().height();
        screen.print(Point::new(0, footer), HELP, COL_DIM, COL_BG);
        if let Some(notice) = &self.notice {
            screen.print(Point::new(0, footer + 1), notice, COL_NOTICE, COL_BG);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_paths::{ASTAR, BFS, GREEDY};
    use std::time::Duration;

    fn visualiser() -> Visualiser {
        Visualiser::new(&VisualiserConfig {
            width: 8,
            height: 5,
            interval: Duration::from_millis(5),
        })
        .unwrap()
    }

    fn press(v: &mut Visualiser, key: Key) -> Option<Effect> {
        v.update(Msg::key(key))
    }

    fn screen_of(v: &Visualiser) -> Screen {
        let size = v.screen_size();
        let mut s = Screen::new(size.x, size.y);
        v.draw(&mut s);
        s
    }

    #[test]
    fn quit_keys_end_the_loop() {
        let mut v = visualiser();
        assert_eq!(press(&mut v, Key::Char('q')), Some(Effect::End));
        assert_eq!(press(&mut v, Key::Escape), Some(Effect::End));
    }

    #[test]
    fn play_without_algorithm_shows_notice() {
        let mut v = visualiser();
        press(&mut v, Key::Enter);
        assert_eq!(v.notice.as_deref(), Some("Choose an algorithm!"));
        let s = screen_of(&v);
        let footer = HEADER_ROWS + 5 + 1;
        assert_eq!(s.at(Point::new(0, footer)).ch, 'C');
        // Next key clears it.
        press(&mut v, Key::Char('w'));
        assert_eq!(v.notice, None);
    }

    #[test]
    fn tab_cycles_through_registry() {
        let mut v = visualiser();
        press(&mut v, Key::Tab);
        assert_eq!(v.controller().session().algorithm_name(), Some(BFS));
        press(&mut v, Key::BackTab);
        press(&mut v, Key::BackTab);
        assert_eq!(v.controller().session().algorithm_name(), Some(GREEDY));
        press(&mut v, Key::Char('4'));
        assert_eq!(v.controller().session().algorithm_name(), Some(ASTAR));
        press(&mut v, Key::Char('9'));
        assert_eq!(v.controller().session().algorithm_name(), Some(ASTAR));
    }

    #[test]
    fn mouse_drag_paints_grid_cells() {
        let mut v = visualiser();
        v.update(Msg::mouse(MouseAction::Main, Point::new(2, HEADER_ROWS + 1)));
        v.update(Msg::mouse(MouseAction::Move, Point::new(3, HEADER_ROWS + 1)));
        v.update(Msg::mouse(MouseAction::Release, Point::new(3, HEADER_ROWS + 1)));
        v.update(Msg::mouse(MouseAction::Move, Point::new(4, HEADER_ROWS + 1)));
        let grid = v.controller().grid();
        assert_eq!(grid.count_type(CellType::Wall), 2);
        assert!(grid.at(Point::at(1, 2)).unwrap().is_wall());

        let s = screen_of(&v);
        assert_eq!(s.at(Point::new(2, HEADER_ROWS + 1)).ch, '█');
        assert_eq!(s.at(Point::new(0, HEADER_ROWS)).ch, 'S');
    }

    #[test]
    fn ticks_drive_the_animation() {
        let mut v = visualiser();
        press(&mut v, Key::Char('1'));
        let t0 = Instant::now();
        v.update(Msg::KeyDown {
            key: Key::Enter,
            time: t0,
        });
        assert!(v.controller().is_busy());
        v.update(Msg::Tick {
            time: t0 + Duration::from_secs(10),
        });
        assert!(!v.controller().is_busy());

        let s = screen_of(&v);
        let goal = v.controller().grid().goal().unwrap().shift(0, HEADER_ROWS);
        assert_eq!(s.at(goal).bg, COL_PATH);
    }
}
