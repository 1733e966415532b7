//! Stylesheet embedded in generated pages.
//!
//! Card layout classes: `card`, `row`/`column` for flow direction,
//! `auto`/`medium`/`large` for sizing, `selected` for the active filter.

pub const PAGE_STYLES: &str = r#"
:root {
  --paper: #f4efe4;
  --ink: #2b2622;
  --ink-muted: rgba(43, 38, 34, 0.6);
  --accent: #7a3b2e;
  --card-bg: #fffdf8;
  --card-border: #d8cfbf;
  --font-serif: Georgia, 'Times New Roman', serif;
}

body {
  margin: 0;
  background: var(--paper);
  color: var(--ink);
  font-family: var(--font-serif);
}

#content {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 1rem;
}

.card {
  display: flex;
  gap: 0.5rem;
  padding: 1rem;
  background: var(--card-bg);
  border: 1px solid var(--card-border);
  border-radius: 6px;
  box-sizing: border-box;
}

.card.row { flex-direction: row; }
.card.column { flex-direction: column; }

.card.auto { width: auto; }
.card.medium { max-width: 40rem; }
.card.large { width: 100%; max-width: 60rem; }

.card button {
  font: inherit;
  padding: 0.25rem 0.75rem;
  background: transparent;
  border: 1px solid var(--card-border);
  border-radius: 4px;
  color: var(--ink-muted);
}

.card button.selected {
  border-color: var(--accent);
  color: var(--accent);
}

.card select {
  font: inherit;
}
"#;
