//! Replay scripts and the console host
//!
//! A script is one step per line: a timestamp in milliseconds, a command,
//! and its arguments. `#` starts a comment.
//!
//! ```text
//! 0    key 1          # open slot 1
//! 10   down 300 300   # pointer pressed (screen pixels)
//! 20   move 360 300
//! 30   up
//! 900  tick           # just advance the clock
//! ```

use anyhow::{anyhow, bail, Context, Result};
use log::debug;

use spellpad::gesture::{DrawSurface, EffectSink, FlatSurface, LookLock, Pose, StrokeRenderer};
use spellpad::{EffectToken, Key, Point2, PointerEvent};

// ═══════════════════════════════════════════════════════════════════════════════
// SCRIPT
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Key(Key),
    Pointer(PointerEvent),
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub at: u64,
    pub command: Command,
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    let mut last_at = 0;
    for (number, line) in text.lines().enumerate() {
        let step = parse_line(line).with_context(|| format!("line {}", number + 1))?;
        if let Some(step) = step {
            if step.at < last_at {
                bail!("line {}: time goes backwards ({} < {})", number + 1, step.at, last_at);
            }
            last_at = step.at;
            steps.push(step);
        }
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<Option<Step>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let at = words
        .next()
        .ok_or_else(|| anyhow!("missing timestamp"))?
        .parse::<u64>()
        .context("timestamp")?;
    let verb = words.next().ok_or_else(|| anyhow!("missing command"))?;

    let command = match verb {
        "key" => Command::Key(parse_key(words.next().ok_or_else(|| anyhow!("key needs a name"))?)?),
        "down" => Command::Pointer(PointerEvent::Begin(parse_point(&mut words)?)),
        "move" => Command::Pointer(PointerEvent::Move(parse_point(&mut words)?)),
        "up" => Command::Pointer(PointerEvent::End),
        "tick" => Command::Tick,
        other => bail!("unknown command {:?}", other),
    };

    if let Some(extra) = words.next() {
        bail!("unexpected argument {:?}", extra);
    }
    Ok(Some(Step { at, command }))
}

fn parse_key(name: &str) -> Result<Key> {
    if name.eq_ignore_ascii_case("esc") || name.eq_ignore_ascii_case("escape") {
        return Ok(Key::Escape);
    }
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Key::Char(c)),
        _ => bail!("unknown key {:?}", name),
    }
}

fn parse_point<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Point2> {
    let mut coord = |axis: &str| -> Result<f32> {
        words
            .next()
            .ok_or_else(|| anyhow!("missing {} coordinate", axis))?
            .parse::<f32>()
            .with_context(|| format!("{} coordinate", axis))
    };
    let x = coord("x")?;
    let y = coord("y")?;
    Ok(Point2::new(x, y))
}

// ═══════════════════════════════════════════════════════════════════════════════
// CONSOLE HOST
// ═══════════════════════════════════════════════════════════════════════════════

/// Host for the replay: flat pad on screen, effects printed to stdout
pub struct ConsoleHost {
    surface: FlatSurface,
    stroke_samples: usize,
    pub effects: Vec<EffectToken>,
}

impl ConsoleHost {
    pub fn new(surface: FlatSurface) -> Self {
        Self {
            surface,
            stroke_samples: 0,
            effects: Vec::new(),
        }
    }
}

impl DrawSurface for ConsoleHost {
    fn project(&self, pointer: Point2) -> Option<Point2> {
        self.surface.project(pointer)
    }

    fn to_screen(&self, local: Point2) -> Point2 {
        self.surface.to_screen(local)
    }
}

impl StrokeRenderer for ConsoleHost {
    fn begin_stroke(&mut self) {
        self.stroke_samples = 0;
    }

    fn push_point(&mut self, local: Point2) {
        self.stroke_samples += 1;
        debug!("sample {} at ({:.3}, {:.3})", self.stroke_samples, local.x, local.y);
    }

    fn move_last(&mut self, _local: Point2) {}

    fn clear(&mut self) {
        self.stroke_samples = 0;
    }
}

impl EffectSink for ConsoleHost {
    fn view_pose(&self) -> Option<Pose> {
        Some(Pose::IDENTITY)
    }

    fn spawn(&mut self, effect: EffectToken, anchor: Pose) {
        println!("         effect {:#018x} at {:?}", effect.raw(), anchor.position);
        self.effects.push(effect);
    }
}

impl LookLock for ConsoleHost {
    fn set_look_enabled(&mut self, enabled: bool) {
        debug!("look {}", if enabled { "enabled" } else { "locked" });
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
