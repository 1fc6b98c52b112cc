//! Timer-stepped text effects: scramble-to-text and the typewriter loop.

pub const SCRAMBLE_CHARSET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Ticks spent on each character before it settles.
const TICKS_PER_CHAR: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct Scramble {
    target: Vec<char>,
    charset: Vec<char>,
    ticks: usize,
    done: bool,
}

impl Scramble {
    pub fn new(text: &str) -> Self {
        Self::with_charset(text, SCRAMBLE_CHARSET)
    }

    pub fn with_charset(text: &str, charset: &str) -> Self {
        let charset: Vec<char> = charset.chars().collect();
        Scramble {
            target: text.chars().collect(),
            charset: if charset.is_empty() { vec!['#'] } else { charset },
            ticks: 0,
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Produces the next frame. `random` must return values in `[0, 1)`.
    pub fn tick(&mut self, mut random: impl FnMut() -> f64) -> String {
        if self.done {
            return self.target.iter().collect();
        }
        let frame = self
            .target
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if c == ' ' || i * TICKS_PER_CHAR < self.ticks {
                    c
                } else {
                    let pick = (random().clamp(0.0, 1.0) * self.charset.len() as f64) as usize;
                    self.charset[pick.min(self.charset.len() - 1)]
                }
            })
            .collect();
        if self.ticks >= self.target.len() * TICKS_PER_CHAR {
            self.done = true;
        }
        self.ticks += 1;
        frame
    }
}

/// Types each text out, holds it, deletes it at double speed, then moves on.
#[derive(Clone, Debug, PartialEq)]
pub struct Typewriter {
    texts: Vec<Vec<char>>,
    current: usize,
    shown: usize,
    deleting: bool,
    speed_ms: u32,
    pause_ms: u32,
    next_delay_ms: u32,
}

impl Typewriter {
    pub fn new(texts: &[String], speed_ms: u32, pause_ms: u32) -> Self {
        Typewriter {
            texts: texts.iter().map(|t| t.chars().collect()).collect(),
            current: 0,
            shown: 0,
            deleting: false,
            speed_ms,
            pause_ms,
            next_delay_ms: speed_ms,
        }
    }

    pub fn displayed(&self) -> String {
        self.texts
            .get(self.current)
            .map(|t| t[..self.shown.min(t.len())].iter().collect())
            .unwrap_or_default()
    }

    /// Delay before the next call to [`Typewriter::step`].
    pub fn next_delay_ms(&self) -> u32 {
        self.next_delay_ms
    }

    pub fn step(&mut self) {
        let Some(text) = self.texts.get(self.current) else {
            return;
        };
        let len = text.len();
        self.next_delay_ms = if !self.deleting {
            if self.shown < len {
                self.shown += 1;
                self.speed_ms
            } else {
                self.deleting = true;
                self.pause_ms
            }
        } else if self.shown > 0 {
            self.shown -= 1;
            self.speed_ms / 2
        } else {
            self.deleting = false;
            self.current = (self.current + 1) % self.texts.len();
            self.speed_ms
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scramble_resolves_to_text() {
        let mut scramble = Scramble::new("Hi there");
        let mut frames = Vec::new();
        while !scramble.is_done() {
            frames.push(scramble.tick(|| 0.0));
            assert!(frames.len() < 100);
        }
        assert_eq!(frames.last().map(String::as_str), Some("Hi there"));
        assert_eq!(frames[0], "AA AAAAA");
        assert!(frames.iter().all(|f| f.chars().nth(2) == Some(' ')));
        assert_eq!(scramble.tick(|| 0.5), "Hi there");
    }

    #[test]
    fn scramble_reveals_a_character_every_three_ticks() {
        let mut scramble = Scramble::with_charset("abc", "#");
        let frames: Vec<String> = (0..10).map(|_| scramble.tick(|| 0.99)).collect();
        assert_eq!(frames[0], "###");
        assert_eq!(frames[1], "a##");
        assert_eq!(frames[4], "ab#");
        assert_eq!(frames[6], "ab#");
        assert_eq!(frames[7], "abc");
        assert!(scramble.is_done());
    }

    #[test]
    fn scramble_is_done_on_a_resolved_frame() {
        // same order as the interval: tick, then stop once done
        let mut scramble = Scramble::with_charset("abc", "#");
        let mut ticks = 0;
        let last = loop {
            let frame = scramble.tick(|| 0.5);
            ticks += 1;
            if scramble.is_done() {
                break frame;
            }
        };
        assert_eq!(last, "abc");
        assert_eq!(ticks, 3 * TICKS_PER_CHAR + 1);
    }

    #[test]
    fn empty_scramble_finishes_at_once() {
        let mut scramble = Scramble::new("");
        assert_eq!(scramble.tick(|| 0.3), "");
        assert!(scramble.is_done());
    }

    #[test]
    fn typewriter_cycles() {
        let texts = vec!["ab".to_string(), "c".to_string()];
        let mut writer = Typewriter::new(&texts, 50, 2500);
        assert_eq!(writer.displayed(), "");
        writer.step();
        assert_eq!(writer.displayed(), "a");
        writer.step();
        assert_eq!(writer.displayed(), "ab");
        writer.step();
        assert_eq!(writer.next_delay_ms(), 2500);
        writer.step();
        assert_eq!(writer.displayed(), "a");
        assert_eq!(writer.next_delay_ms(), 25);
        writer.step();
        writer.step();
        assert_eq!(writer.displayed(), "");
        writer.step();
        assert_eq!(writer.displayed(), "c");
    }

    #[test]
    fn typewriter_without_texts_is_inert() {
        let mut writer = Typewriter::new(&[], 50, 100);
        writer.step();
        assert_eq!(writer.displayed(), "");
    }
}
