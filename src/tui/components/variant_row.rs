// Variant row component
//
// Renders one selectable answer variant: selection marker, text, and -
// once the question is completed - a correctness mark. The row itself is
// stateless; all flags arrive derived from the quiz model snapshot.

use crate::deck::Variant;
use crate::tui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

/// Derived props for one variant row.
///
/// `correct` is already gated on completion by the widget: it is never
/// true while the question is still in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantProps<'a> {
    /// Group identifier shared by all variants of one question
    pub name: &'a str,

    /// The variant descriptor (opaque beyond its text)
    pub variant: &'a Variant,

    /// Position in the variant list; identity for selection lookups
    pub index: usize,

    pub selected: bool,
    pub completed: bool,
    pub correct: bool,
}

/// Build the display line for a variant row
pub fn line<'a>(props: &VariantProps<'a>, under_cursor: bool, theme: &Theme, width: u16) -> Line<'a> {
    let marker = if props.selected { "[x] " } else { "[ ] " };

    // Correctness marks only appear after completion
    let mark = if props.correct {
        Some((" ✓", theme.correct))
    } else if props.completed && props.selected {
        // Selected but not correct: a miss
        Some((" ✗", theme.wrong))
    } else {
        None
    };

    let mark_width = if mark.is_some() { 2 } else { 0 };
    let budget = (width as usize)
        .saturating_sub(marker.len())
        .saturating_sub(mark_width);
    let text = truncate_to_width(&props.variant.text, budget);

    let base_style = if under_cursor {
        Style::default()
            .bg(theme.cursor_bg)
            .fg(theme.cursor_fg)
            .add_modifier(Modifier::BOLD)
    } else if props.selected {
        Style::default().fg(theme.selected)
    } else {
        Style::default().fg(theme.fg)
    };

    let mut spans = vec![Span::styled(marker, base_style), Span::styled(text, base_style)];
    if let Some((mark, color)) = mark {
        spans.push(Span::styled(
            mark,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}

/// Truncate `text` to at most `max_width` terminal columns, appending an
/// ellipsis when something was cut. Width-aware so Cyrillic and CJK
/// variants don't overflow narrow terminals.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_width {
        return text.to_string();
    }

    // Leave one column for the ellipsis
    let budget = max_width.saturating_sub(1);
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(text: &str) -> Variant {
        Variant {
            text: text.to_string(),
        }
    }

    fn props<'a>(v: &'a Variant, selected: bool, completed: bool, correct: bool) -> VariantProps<'a> {
        VariantProps {
            name: "q1",
            variant: v,
            index: 0,
            selected,
            completed,
            correct,
        }
    }

    fn rendered(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn unselected_row_has_empty_marker() {
        let v = variant("Rust");
        let line = line(&props(&v, false, false, false), false, &Theme::dark(), 40);
        assert_eq!(rendered(&line), "[ ] Rust");
    }

    #[test]
    fn selected_row_has_filled_marker() {
        let v = variant("Rust");
        let line = line(&props(&v, true, false, false), false, &Theme::dark(), 40);
        assert_eq!(rendered(&line), "[x] Rust");
    }

    #[test]
    fn correct_mark_appears_only_after_completion() {
        let v = variant("Rust");
        let in_progress = line(&props(&v, true, false, false), false, &Theme::dark(), 40);
        assert!(!rendered(&in_progress).contains('✓'));

        let completed = line(&props(&v, true, true, true), false, &Theme::dark(), 40);
        assert!(rendered(&completed).ends_with('✓'));
    }

    #[test]
    fn selected_wrong_answer_gets_a_miss_mark() {
        let v = variant("Python");
        let line = line(&props(&v, true, true, false), false, &Theme::dark(), 40);
        assert!(rendered(&line).ends_with('✗'));
    }

    #[test]
    fn unselected_wrong_answer_gets_no_mark() {
        let v = variant("Python");
        let line = line(&props(&v, false, true, false), false, &Theme::dark(), 40);
        assert_eq!(rendered(&line), "[ ] Python");
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 20), "short");
        let cut = truncate_to_width("очень длинный вариант ответа", 10);
        assert!(cut.ends_with('…'));
        let total: usize = cut.chars().map(|c| c.width().unwrap_or(0)).sum();
        assert!(total <= 10);
    }
}
