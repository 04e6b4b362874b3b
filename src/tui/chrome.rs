// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Builds the search line (badges, then the main input) and the cursor column within it.
fn search_line(controller: &Controller) -> (Line<'static>, usize) {
    let mut spans = Vec::<Span<'static>>::new();
    let mut width = 0usize;
    let mut cursor = None::<usize>;

    for badge in controller.badges().iter() {
        let (badge_spans, value_end) = badge_spans(badge);
        if badge.is_focused() {
            cursor = Some(width + value_end);
        }
        width += badge_spans.iter().map(Span::width).sum::<usize>() + 1;
        spans.extend(badge_spans);
        spans.push(Span::raw(" "));
    }

    let input = controller.input();
    if input.is_empty() && controller.placeholder_visible() && controller.badges().is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(PLACEHOLDER_COLOR)));
    } else {
        spans.push(Span::raw(input.to_owned()));
    }
    let cursor = cursor.unwrap_or(width + Span::raw(input.to_owned()).width());

    (Line::from(spans), cursor)
}

/// Spans of one badge chip, plus the column right after its value.
fn badge_spans(badge: &FilterBadge) -> (Vec<Span<'static>>, usize) {
    let chip = Style::default().bg(BADGE_BG).fg(BADGE_FG);
    let value_style = if badge.is_focused() { chip.add_modifier(Modifier::UNDERLINED) } else { chip };

    let mut spans = vec![Span::styled(format!(" {}:", badge.kind().label()), chip)];
    if badge.avatar_url().is_some() {
        spans.push(Span::styled("◉", chip.fg(Color::Blue)));
    }
    // The editor is at least one cell wide, like an empty `<input size=1>`.
    let value = format!("{:<width$}", badge.display_value(), width = badge.size_hint());
    spans.push(Span::styled(value, value_style));

    let value_end = spans.iter().map(Span::width).sum::<usize>();
    let value_end = if badge.is_empty() { value_end - 1 } else { value_end };
    spans.push(Span::styled(" ", chip));
    (spans, value_end)
}

fn highlighted_spans(text: &HighlightedText, base: Style) -> Vec<Span<'static>> {
    text.segments()
        .iter()
        .map(|segment| {
            let style = if segment.emphasized {
                base.fg(MATCH_COLOR).add_modifier(Modifier::BOLD)
            } else {
                base
            };
            Span::styled(segment.text.clone(), style)
        })
        .collect()
}

fn suggestion_list_item(item: &SuggestionItem) -> ListItem<'static> {
    let highlights = item.highlights();
    let mut first = highlighted_spans(&highlights.display_name, Style::default().add_modifier(Modifier::BOLD));
    if item.suggestion().verified {
        first.push(Span::styled(VERIFIED_MARK, Style::default().fg(Color::LightBlue)));
    }
    first.push(Span::raw("  "));
    first.extend(highlighted_spans(&highlights.handle, Style::default().fg(CONTEXT_COLOR)));

    let mut lines = vec![Line::from(first)];
    if !item.suggestion().context_label.is_empty() {
        let mut second = vec![Span::raw("  ")];
        second.extend(highlighted_spans(
            &highlights.context_label,
            Style::default().fg(CONTEXT_COLOR).add_modifier(Modifier::ITALIC),
        ));
        lines.push(Line::from(second));
    }
    ListItem::new(lines)
}

fn footer_help_line(controller: &Controller, toast: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    push_footer_entry(&mut spans, "NAV", "↑↓");
    match controller.focus() {
        Focus::Input => {
            let enter = if controller.suggestions().selected_index().is_some() {
                "⏎ pick"
            } else {
                "⏎ search"
            };
            push_footer_entry(&mut spans, "ENTER", enter);
            push_footer_entry(&mut spans, "FILTER", "from: / to:");
            if !controller.badges().is_empty() && controller.input().is_empty() {
                push_footer_entry(&mut spans, "EDIT BADGE", "⌫");
            }
        }
        Focus::Badge(kind) => {
            push_footer_entry(&mut spans, kind.label(), "⏎ pick");
            push_footer_entry(&mut spans, "DONE", "space");
            push_footer_entry(&mut spans, "REMOVE", "⌫ on empty");
        }
    }
    push_footer_entry(&mut spans, "QUIT", "esc");

    if !toast.is_empty() {
        spans.push(Span::styled(
            format!("  {toast}"),
            Style::default().fg(FOOTER_LABEL_COLOR).add_modifier(Modifier::ITALIC),
        ));
    }
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
