//! Static stylesheet and script served under `/assets`.

pub const STYLE_CSS: &str = r#":root {
  --accent: #4f46e5;
  --muted: #666;
  --border: #e0e0e0;
}

body {
  font-family: system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
  margin: 0;
  background: #f8fafc;
  color: #1f2937;
}

.header {
  padding: 2rem;
  background: linear-gradient(135deg, #4f46e5, #7c3aed);
  color: #fff;
}

.header h1 {
  margin: 0 0 0.5rem 0;
}

.layout {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 2rem;
  padding: 2rem;
}

@media (max-width: 800px) {
  .layout {
    grid-template-columns: 1fr;
  }
}

.meta-form {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.meta-form input,
.meta-form textarea {
  padding: 0.5rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  font: inherit;
}

.char-counter {
  font-size: 0.8em;
  color: var(--muted);
  text-align: right;
}

.form-error {
  padding: 0.75rem;
  border-radius: 6px;
  background: #fee2e2;
  color: #991b1b;
}

.submit-btn {
  margin-top: 1rem;
  padding: 0.75rem;
  border: none;
  border-radius: 6px;
  background: var(--accent);
  color: #fff;
  font-weight: 600;
  cursor: pointer;
}

.code-block {
  position: relative;
  background: #1e293b;
  color: #e2e8f0;
  border-radius: 8px;
  padding: 1rem;
  overflow-x: auto;
}

.copy-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
}

.preview-card {
  background: #fff;
  padding: 1rem;
  border-radius: 8px;
}

.google-title {
  color: #1a0dab;
  margin: 0;
}

.google-url {
  color: #006621;
  margin: 0.2rem 0;
}

.google-description {
  color: #545454;
  margin: 0;
}

.social-card {
  border: 1px solid var(--border);
  border-radius: 8px;
  padding: 1rem;
}

.social-description,
.social-url {
  color: var(--muted);
}

.social-url {
  font-size: 0.9em;
}

.metric {
  margin: 0.75rem 0;
}

.metric-value {
  font-size: 1.6em;
  font-weight: 600;
}

.verdict-perfect {
  color: #15803d;
}

.verdict-short,
.verdict-long {
  color: #b45309;
}
"#;

pub const MAIN_JS: &str = r#"// Copy the generated tag block.
document.querySelectorAll('[data-copy-target]').forEach((button) => {
  button.addEventListener('click', () => {
    const target = document.getElementById(button.dataset.copyTarget);
    if (!target) return;
    navigator.clipboard.writeText(target.textContent).then(() => {
      button.textContent = 'Copied!';
      setTimeout(() => { button.textContent = 'Copy'; }, 1500);
    });
  });
});

// Live length/maxlength counters under each input. Counts UTF-16 units,
// the same unit the browser's maxlength uses.
document.querySelectorAll('.meta-form input, .meta-form textarea').forEach((input) => {
  const counter = document.createElement('div');
  counter.className = 'char-counter';
  input.insertAdjacentElement('afterend', counter);

  const update = () => {
    const max = input.getAttribute('maxlength') || '∞';
    counter.textContent = `${input.value.length}/${max}`;
  };
  input.addEventListener('input', update);
  update();
});
"#;
