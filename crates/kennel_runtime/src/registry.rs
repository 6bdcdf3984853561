//! Style injection channel
//!
//! One registry per browsing context. Stylesheets live in keyed slots; a
//! slot holds at most one sheet and injecting again replaces it. Cascade
//! order is fixed by slot kind, not by injection order:
//! theme, then global button preset, then instance presets.

use kennel_theme::CssVariables;
use std::fmt;

/// Key of an injected stylesheet
#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub enum StyleSlot {
    Theme,
    GlobalButtonPreset,
    /// Preset scoped to buttons carrying this slug
    Instance(String),
}

impl StyleSlot {
    fn rank(&self) -> u8 {
        match self {
            StyleSlot::Theme => 0,
            StyleSlot::GlobalButtonPreset => 1,
            StyleSlot::Instance(_) => 2,
        }
    }

    /// Element id the sheet would carry in a document head
    pub fn element_id(&self) -> String {
        match self {
            StyleSlot::Theme => "theme-styles".to_string(),
            StyleSlot::GlobalButtonPreset => "button-preset-styles".to_string(),
            StyleSlot::Instance(slug) => format!("button-preset-{slug}"),
        }
    }
}

impl fmt::Display for StyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.element_id())
    }
}

/// Ordered set of injected stylesheets
#[derive(Debug, Default)]
pub struct StyleRegistry {
    sheets: Vec<(StyleSlot, String)>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `css` under `slot`, replacing any sheet already there
    pub fn inject(&mut self, slot: StyleSlot, css: impl Into<String>) {
        let css = css.into();
        if let Some(existing) = self.sheets.iter_mut().find(|(s, _)| *s == slot) {
            existing.1 = css;
            tracing::debug!(%slot, "replaced stylesheet");
            return;
        }
        let rank = slot.rank();
        let at = self
            .sheets
            .iter()
            .position(|(s, _)| s.rank() > rank)
            .unwrap_or(self.sheets.len());
        tracing::debug!(%slot, position = at, "injected stylesheet");
        self.sheets.insert(at, (slot, css));
    }

    /// Remove the sheet under `slot`. Returns false if there was none.
    pub fn remove(&mut self, slot: &StyleSlot) -> bool {
        let before = self.sheets.len();
        self.sheets.retain(|(s, _)| s != slot);
        let removed = self.sheets.len() != before;
        if removed {
            tracing::debug!(%slot, "removed stylesheet");
        }
        removed
    }

    pub fn get(&self, slot: &StyleSlot) -> Option<&str> {
        self.sheets
            .iter()
            .find(|(s, _)| s == slot)
            .map(|(_, css)| css.as_str())
    }

    pub fn contains(&self, slot: &StyleSlot) -> bool {
        self.get(slot).is_some()
    }

    /// Slots in cascade order
    pub fn slots(&self) -> impl Iterator<Item = &StyleSlot> {
        self.sheets.iter().map(|(slot, _)| slot)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// All sheets concatenated in cascade order
    pub fn cascade(&self) -> String {
        self.sheets
            .iter()
            .map(|(_, css)| css.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Custom properties declared on `:root`, cascaded across every sheet.
    ///
    /// Later declarations win; `var(--x)` references are then substituted
    /// with the cascaded value of `--x` (or their fallback).
    pub fn root_variables(&self) -> CssVariables {
        let mut vars = CssVariables::default();
        for (_, css) in &self.sheets {
            for (selector, body) in top_level_rules(css) {
                if selector.split(',').any(|s| s.trim() == ":root") {
                    for (name, value) in declarations(body) {
                        if name.starts_with("--") {
                            vars.insert(name.to_string(), value.to_string());
                        }
                    }
                }
            }
        }
        substitute_vars(&mut vars);
        vars
    }
}

/// Top-level `selector { body }` pairs, comments stripped, at-rules skipped
fn top_level_rules(css: &str) -> Vec<(&str, &str)> {
    let mut rules = Vec::new();
    let bytes = css.as_bytes();
    let mut depth = 0usize;
    let mut start = 0usize;
    let mut body_start = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let end = css[i + 2..].find("*/").map_or(bytes.len(), |e| i + 2 + e + 2);
                if depth == 0 {
                    start = end;
                }
                i = end;
                continue;
            }
            b'{' => {
                if depth == 0 {
                    body_start = i + 1;
                }
                depth += 1;
            }
            b'}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    let selector = css[start..body_start - 1].trim();
                    if !selector.starts_with('@') {
                        rules.push((selector, &css[body_start..i]));
                    }
                    start = i + 1;
                }
            }
            _ => {}
        }
        i += 1;
    }
    rules
}

fn declarations(body: &str) -> impl Iterator<Item = (&str, &str)> {
    split_declarations(body).into_iter().filter_map(|decl| {
        let (name, value) = decl.split_once(':')?;
        let name = name.trim();
        let value = value.trim().trim_end_matches("!important").trim();
        (!name.is_empty()).then_some((name, value))
    })
}

/// Split on `;` outside parentheses and quoted strings
fn split_declarations(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0usize;
    for (i, c) in body.char_indices() {
        if let Some(q) = quote {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                _ if c == q => quote = None,
                _ => {}
            }
            continue;
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

const MAX_VAR_DEPTH: usize = 8;

fn substitute_vars(vars: &mut CssVariables) {
    for _ in 0..MAX_VAR_DEPTH {
        let snapshot = vars.clone();
        let mut changed = false;
        for value in vars.values_mut() {
            if let Some(resolved) = resolve_once(value, &snapshot) {
                *value = resolved;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
}

/// Replace each `var(--name[, fallback])` in `value`; `None` if nothing changed
fn resolve_once(value: &str, vars: &CssVariables) -> Option<String> {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    let mut changed = false;
    while let Some(at) = rest.find("var(") {
        let args_start = at + 4;
        let Some(close) = matching_paren(&rest[args_start..]) else {
            break;
        };
        let args = &rest[args_start..args_start + close];
        let (name, fallback) = match args.split_once(',') {
            Some((name, fallback)) => (name.trim(), Some(fallback.trim())),
            None => (args.trim(), None),
        };
        out.push_str(&rest[..at]);
        match vars.get(name).map(String::as_str).or(fallback) {
            Some(replacement) if !replacement.contains(&format!("var({name}")) => {
                out.push_str(replacement);
                changed = true;
            }
            _ => out.push_str(&rest[at..args_start + close + 1]),
        }
        rest = &rest[args_start + close + 1..];
    }
    out.push_str(rest);
    changed.then_some(out)
}

fn matching_paren(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' if depth == 0 => return Some(i),
            ')' => depth -= 1,
            _ => {}
        }
    }
    None
}
