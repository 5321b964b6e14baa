// src/output/format.rs

/// Style tags understood by [`render`] and their ANSI escape codes.
const STYLE_TAGS: &[(&str, &str)] = &[
    // reset
    ("</>", "\x1b[m"),
    ("<b>", "\x1b[1m"),
    ("<f>", "\x1b[2m"),
    ("<i>", "\x1b[3m"),
    ("<u>", "\x1b[4m"),
    ("<blink>", "\x1b[5m"),
    ("<hidden>", "\x1b[8m"),
    ("<s>", "\x1b[9m"),
    ("<black>", "\x1b[38;5;0m"),
    ("<gray>", "\x1b[38;5;8m"),
    ("<white>", "\x1b[38;5;7m"),
    ("<red>", "\x1b[38;5;1m"),
    ("<green>", "\x1b[38;5;2m"),
    ("<yellow>", "\x1b[38;5;3m"),
    ("<blue>", "\x1b[38;5;4m"),
    ("<purple>", "\x1b[38;5;5m"),
    ("<cyan>", "\x1b[38;5;6m"),
    ("<bgRed>", "\x1b[48;5;1m"),
    ("<bgGreen>", "\x1b[48;5;2m"),
    ("<bgYellow>", "\x1b[48;5;3m"),
    ("<bgBlue>", "\x1b[48;5;4m"),
    ("<bgPurple>", "\x1b[48;5;5m"),
    ("<bgCyan>", "\x1b[48;5;6m"),
    // cursor
    ("<saveCursor>", "\x1b[s"),
    ("<restoreCursor>", "\x1b[u"),
    ("<eraseToEndLine>", "\x1b[K"),
    ("<eraseToStartLine>", "\x1b[1K"),
    ("<eraseLine>", "\x1b[2K"),
    ("<eraseToBottom>", "\x1b[J"),
    ("<eraseToTop>", "\x1b[1J"),
];

/// Replaces every known style tag with its escape code, or strips it when
/// `ansi` is off. Unknown `<...>` sequences are left as they are.
pub fn render(text: &str, ansi: bool) -> String {
    if !text.contains('<') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('<') {
        let (before, candidate) = rest.split_at(start);
        out.push_str(before);

        match STYLE_TAGS
            .iter()
            .find(|(tag, _)| candidate.starts_with(tag))
        {
            Some((tag, code)) => {
                if ansi {
                    out.push_str(code);
                }
                rest = candidate.get(tag.len()..).unwrap_or_default();
            }
            None => {
                out.push('<');
                rest = candidate.get(1..).unwrap_or_default();
            }
        }
    }
    out.push_str(rest);
    out
}

/// Removes every known style tag, e.g. to measure the visible width of a cell.
pub fn strip(text: &str) -> String {
    render(text, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_become_codes() {
        assert_eq!(render("<b>hi</>", true), "\x1b[1mhi\x1b[m");
        assert_eq!(render("<bgRed> ERROR </>", true), "\x1b[48;5;1m ERROR \x1b[m");
    }

    #[test]
    fn test_tags_are_removed_without_ansi() {
        assert_eq!(render("<yellow>Usage:</>\n <green>x</>", false), "Usage:\n x");
    }

    #[test]
    fn test_unknown_tags_survive() {
        assert_eq!(render("a <b> <email@x> 1<2", false), "a  <email@x> 1<2");
        assert_eq!(strip("<nope>"), "<nope>");
    }
}
