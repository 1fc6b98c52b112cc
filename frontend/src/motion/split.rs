//! Splitting text into independently revealed units.

use super::reveal::Transition;

/// Rendered in place of a space so split characters keep their spacing.
pub const NBSP: char = '\u{00A0}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    Chars,
    Words,
    Lines,
}

impl SplitMode {
    fn hidden_transform(&self) -> &'static str {
        match self {
            SplitMode::Chars => "translateY(100%) rotateX(-90deg)",
            SplitMode::Words => "translateY(100%) rotateX(-80deg)",
            SplitMode::Lines => "translateY(100%)",
        }
    }

    fn transform_origin(&self) -> &'static str {
        match self {
            SplitMode::Chars => "top",
            SplitMode::Words => "top center",
            SplitMode::Lines => "center",
        }
    }

    pub fn duration_ms(&self) -> u32 {
        match self {
            SplitMode::Chars => 800,
            SplitMode::Words | SplitMode::Lines => 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealUnit {
    pub index: usize,
    pub text: String,
    pub delay_ms: u32,
}

/// `start + index * stagger`, saturating instead of wrapping.
pub fn unit_delay(index: usize, start_ms: u32, stagger_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    start_ms.saturating_add(index.saturating_mul(stagger_ms))
}

pub fn split_units(text: &str, mode: SplitMode, start_ms: u32, stagger_ms: u32) -> Vec<RevealUnit> {
    let pieces: Vec<String> = match mode {
        SplitMode::Chars => text
            .chars()
            .map(|c| if c == ' ' { NBSP.to_string() } else { c.to_string() })
            .collect(),
        SplitMode::Words => text.split(' ').filter(|w| !w.is_empty()).map(str::to_string).collect(),
        SplitMode::Lines => text.lines().map(str::to_string).collect(),
    };
    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| RevealUnit { index, text, delay_ms: unit_delay(index, start_ms, stagger_ms) })
        .collect()
}

/// Same as [`split_units`] for text that is already broken into lines.
pub fn line_units(lines: &[String], start_ms: u32, stagger_ms: u32) -> Vec<RevealUnit> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| RevealUnit {
            index,
            text: line.clone(),
            delay_ms: unit_delay(index, start_ms, stagger_ms),
        })
        .collect()
}

pub fn unit_style(mode: SplitMode, unit: &RevealUnit, visible: bool) -> String {
    let transition = Transition::new(mode.duration_ms(), unit.delay_ms)
        .properties("opacity, transform")
        .css();
    if visible {
        format!("{} opacity: 1; transform: none; transform-origin: {};", transition, mode.transform_origin())
    } else {
        format!(
            "{} opacity: 0; transform: {}; transform-origin: {};",
            transition,
            mode.hidden_transform(),
            mode.transform_origin()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_unit_per_character_with_linear_delays() {
        let text = "Create worlds";
        let units = split_units(text, SplitMode::Chars, 200, 25);
        assert_eq!(units.len(), text.chars().count());
        for (i, unit) in units.iter().enumerate() {
            assert_eq!(unit.index, i);
            assert_eq!(unit.delay_ms, 200 + i as u32 * 25);
        }
        assert_eq!(units[6].text, NBSP.to_string());
    }

    #[test]
    fn multibyte_characters_count_once() {
        let units = split_units("héllo ✨", SplitMode::Chars, 0, 10);
        assert_eq!(units.len(), 7);
        assert_eq!(units[6].text, "✨");
    }

    #[test]
    fn empty_text_yields_nothing() {
        for mode in [SplitMode::Chars, SplitMode::Words, SplitMode::Lines] {
            assert!(split_units("", mode, 0, 50).is_empty());
        }
    }

    #[test]
    fn words_skip_repeated_spaces() {
        let units = split_units("From  prompt to art", SplitMode::Words, 0, 60);
        let words: Vec<_> = units.iter().map(|u| u.text.as_str()).collect();
        assert_eq!(words, ["From", "prompt", "to", "art"]);
        assert_eq!(units[3].delay_ms, 180);
    }

    #[test]
    fn lines_keep_order() {
        let lines = vec!["first".to_string(), "second".to_string()];
        let units = line_units(&lines, 0, 150);
        assert_eq!(units[1].delay_ms, 150);
        assert_eq!(split_units("a\nb\nc", SplitMode::Lines, 0, 1).len(), 3);
    }

    #[test]
    fn delays_saturate() {
        assert_eq!(unit_delay(usize::MAX, 10, 10), u32::MAX);
    }

    #[test]
    fn unit_style_follows_visibility() {
        let unit = RevealUnit { index: 2, text: "a".into(), delay_ms: 50 };
        let hidden = unit_style(SplitMode::Chars, &unit, false);
        assert!(hidden.contains("rotateX(-90deg)"));
        assert!(hidden.contains("transition-delay: 50ms;"));
        let shown = unit_style(SplitMode::Chars, &unit, true);
        assert!(shown.contains("opacity: 1; transform: none;"));
    }
}
