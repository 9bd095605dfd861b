//! `pocketcalc keys`: the binding table

use console::Style;
use pocket_calc::core::keymap::KEY_BINDINGS;
use pocket_calc::tui::HELP_EXTRA;

use crate::config::CliConfig;

/// Prints the key bindings
pub fn execute_keys(config: &CliConfig) {
    println!("{}", render_keys(config.color.should_color()));
}

/// Key binding table, calculator keys first, then interactive-only keys
#[must_use]
pub fn render_keys(color: bool) -> String {
    let key_style = Style::new().yellow().bold().force_styling(color);
    let width = KEY_BINDINGS
        .iter()
        .chain(HELP_EXTRA)
        .map(|(keys, _)| keys.chars().count())
        .max()
        .unwrap_or(0);

    KEY_BINDINGS
        .iter()
        .chain(HELP_EXTRA)
        .map(|(keys, desc)| {
            format!(
                "{}  {desc}",
                key_style.apply_to(format!("{keys:<width$}"))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keys_lists_every_binding() {
        let table = render_keys(false);
        assert_eq!(table.lines().count(), KEY_BINDINGS.len() + HELP_EXTRA.len());
        for (keys, desc) in KEY_BINDINGS {
            assert!(table.contains(keys));
            assert!(table.contains(desc));
        }
    }

    #[test]
    fn test_render_keys_aligned() {
        let table = render_keys(false);
        let columns: Vec<usize> = table
            .lines()
            .map(|line| line.find("  ").unwrap_or(0))
            .collect();
        assert!(columns.iter().all(|&c| c > 0));
    }

    #[test]
    fn test_render_keys_no_color() {
        assert!(!render_keys(false).contains('\u{1b}'));
    }
}
